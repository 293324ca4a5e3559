//! Image attachment with an explicit owner reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of records an image can be attached to.
///
/// Stored in `images.imageable_type` as the lowercase tag returned by [`OwnerKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Category,
    Product,
}

impl OwnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Category => "category",
            OwnerKind::Product => "product",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(OwnerKind::Category),
            "product" => Ok(OwnerKind::Product),
            other => Err(format!("unknown image owner kind: {other}")),
        }
    }
}

/// Tagged reference from an image back to the record that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageOwner {
    pub kind: OwnerKind,
    pub id: i64,
}

impl ImageOwner {
    pub fn category(id: i64) -> Self {
        Self {
            kind: OwnerKind::Category,
            id,
        }
    }

    pub fn product(id: i64) -> Self {
        Self {
            kind: OwnerKind::Product,
            id,
        }
    }
}

/// An image file attached to a category or a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub path: String,
    pub owner: ImageOwner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_kind_round_trips_through_tag() {
        for kind in [OwnerKind::Category, OwnerKind::Product] {
            assert_eq!(kind.as_str().parse::<OwnerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_owner_kind_rejects_unknown_tag() {
        assert!("App\\Category".parse::<OwnerKind>().is_err());
    }

    #[test]
    fn test_owner_constructors() {
        assert_eq!(ImageOwner::category(3).kind, OwnerKind::Category);
        assert_eq!(ImageOwner::product(4).id, 4);
    }
}
