//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`] - Categories, their images and related products
//! - [`PgUserRepository`] - User accounts and token lookup

pub mod pg_category_repository;
pub mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_user_repository::PgUserRepository;
