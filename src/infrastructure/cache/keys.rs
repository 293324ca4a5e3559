//! Cache key scheme for categories.

/// Key holding the full category listing.
pub const CATEGORIES: &str = "categories";

/// Key holding a single category's detail view.
pub fn category(id: i64) -> String {
    format!("{CATEGORIES}.{id}")
}

/// Keys evicted after a category row changed or disappeared.
pub fn after_write(id: i64) -> [String; 2] {
    [CATEGORIES.to_string(), category(id)]
}
