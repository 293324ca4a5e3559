//! HTTP request handlers for API endpoints.

pub mod categories;
pub mod health;

pub use categories::{create_category_handler, delete_category_handler, update_category_handler};
pub use health::health_handler;
