//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CategoryRepository`] - Category CRUD plus image and product lookups
//! - [`UserRepository`] - User accounts and token lookup

pub mod category_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
