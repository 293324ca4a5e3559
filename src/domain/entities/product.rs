//! Product entity, as seen from the category side of the relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product linked to one or more categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
