//! Repository trait for category storage.

use crate::domain::entities::{Category, CategoryFields, CategoryWithImage, Image, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories and their relations.
///
/// Implementations must provide atomic single-row create, update, and delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists all categories in insertion order, each with its image if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_images(&self) -> Result<Vec<CategoryWithImage>, AppError>;

    /// Finds a category by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Inserts a category and returns it with its generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, fields: CategoryFields) -> Result<Category, AppError>;

    /// Overwrites name and description of an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, fields: CategoryFields) -> Result<Category, AppError>;

    /// Removes a category. Join rows to products go with it; images stay.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns the image attached to a category, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_image(&self, category_id: i64) -> Result<Option<Image>, AppError>;

    /// Lists products related to a category, ordered by product ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_products(&self, category_id: i64) -> Result<Vec<Product>, AppError>;

    /// Counts all categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
