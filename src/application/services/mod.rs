//! Business logic services for the application layer.

pub mod auth_service;
pub mod category_service;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
