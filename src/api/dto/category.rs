//! DTOs for category endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryFields};

/// Request body for `POST /categories` and `PATCH /categories/{id}`.
///
/// Absent and `null` fields both become empty strings, so they are reported
/// as field errors by validation instead of as a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<CategoryRequest> for CategoryFields {
    fn from(req: CategoryRequest) -> Self {
        CategoryFields::new(
            req.name.unwrap_or_default(),
            req.description.unwrap_or_default(),
        )
    }
}

/// Category as returned by the API.
#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: CategoryRequest = serde_json::from_str(r#"{"name": "Shoes"}"#).unwrap();
        let fields = CategoryFields::from(req);

        assert_eq!(fields.name, "Shoes");
        assert_eq!(fields.description, "");
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let req: CategoryRequest =
            serde_json::from_str(r#"{"name": null, "description": "x"}"#).unwrap();
        let fields = CategoryFields::from(req);

        assert_eq!(fields.name, "");
        assert_eq!(fields.description, "x");
    }
}
