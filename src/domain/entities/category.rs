//! Category entity and its editable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{Image, Product};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new Category instance.
    pub fn new(
        id: i64,
        name: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }
}

/// Editable fields of a category, shared by create and update.
///
/// Both fields are required. Whitespace-only input counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CategoryFields {
    #[validate(
        custom(function = "not_blank", message = "The name field is required."),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "The description field is required."))]
    pub description: String,
}

impl CategoryFields {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// A category joined with its optional image, as shown on the index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithImage {
    pub category: Category,
    pub image: Option<Image>,
}

/// A category with everything the detail page needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub category: Category,
    pub image: Option<Image>,
    pub products: Vec<Product>,
}
