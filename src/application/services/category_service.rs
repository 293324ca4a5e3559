//! Category management service.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::entities::{
    Category, CategoryDetails, CategoryFields, CategoryWithImage, Principal,
};
use crate::domain::policy::{Action, authorize};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, keys};

/// Service owning category records, their read models, and cache consistency.
///
/// Every operation authorizes the principal before touching storage, so a
/// rejected caller changes nothing and learns nothing about the target.
///
/// Reads go through the cache (`categories` for the listing,
/// `categories.{id}` for a detail view). Writes evict after the database
/// write succeeded; the eviction itself is best-effort.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
    cache: Arc<dyn CacheService>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(repository: Arc<dyn CategoryRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Lists all categories with their optional image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_categories(
        &self,
        principal: &Principal,
    ) -> Result<Vec<CategoryWithImage>, AppError> {
        authorize(principal, Action::ListCategories)?;

        if let Some(cached) = self.read_cached(keys::CATEGORIES).await {
            return Ok(cached);
        }

        let categories = self.repository.list_with_images().await?;
        self.write_cached(keys::CATEGORIES, &categories).await;

        Ok(categories)
    }

    /// Retrieves a category with its image and related products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_category(
        &self,
        principal: &Principal,
        id: i64,
    ) -> Result<CategoryDetails, AppError> {
        authorize(principal, Action::ViewCategory)?;

        let key = keys::category(id);
        if let Some(cached) = self.read_cached(&key).await {
            return Ok(cached);
        }

        let category = self.find_existing(id).await?;
        let image = self.repository.find_image(id).await?;
        let products = self.repository.list_products(id).await?;

        let details = CategoryDetails {
            category,
            image,
            products,
        };
        self.write_cached(&key, &details).await;

        Ok(details)
    }

    /// Creates a category.
    ///
    /// Evicts the listing so the new row shows up on the next read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the principal is not an admin.
    /// Returns [`AppError::Validation`] if a field is blank or too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_category(
        &self,
        principal: &Principal,
        fields: CategoryFields,
    ) -> Result<Category, AppError> {
        authorize(principal, Action::CreateCategory)?;

        let fields = fields.trimmed();
        fields.validate()?;

        let category = self.repository.create(fields).await?;
        info!(
            category_id = category.id,
            user_id = principal.user_id,
            "Category created"
        );

        self.evict(&[keys::CATEGORIES.to_string()]).await;

        Ok(category)
    }

    /// Updates name and description of a category.
    ///
    /// On success both the listing and the record's detail entry are evicted,
    /// whether or not the values actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the principal is not an admin.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Validation`] if a field is blank or too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_category(
        &self,
        principal: &Principal,
        id: i64,
        fields: CategoryFields,
    ) -> Result<Category, AppError> {
        authorize(principal, Action::UpdateCategory)?;

        self.find_existing(id).await?;

        let fields = fields.trimmed();
        fields.validate()?;

        let category = self.repository.update(id, fields).await?;
        info!(
            category_id = id,
            user_id = principal.user_id,
            "Category updated"
        );

        self.evict(&keys::after_write(id)).await;

        Ok(category)
    }

    /// Deletes a category.
    ///
    /// The attached image row is left in place. Both cache entries are evicted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the principal is not an admin.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_category(&self, principal: &Principal, id: i64) -> Result<(), AppError> {
        authorize(principal, Action::DeleteCategory)?;

        self.find_existing(id).await?;
        self.repository.delete(id).await?;
        info!(
            category_id = id,
            user_id = principal.user_id,
            "Category deleted"
        );

        self.evict(&keys::after_write(id)).await;

        Ok(())
    }

    /// Counts stored categories. Used by the health check, no principal needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_categories(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn find_existing(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "id": id })))
    }

    /// Reads and decodes a cached value. Any failure counts as a miss.
    async fn read_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn write_cached<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode cache entry {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &raw, None).await {
            warn!("Cache write failed for {}: {}", key, e);
        }
    }

    async fn evict(&self, keys: &[String]) {
        for key in keys {
            if let Err(e) = self.cache.invalidate(key).await {
                warn!("Cache invalidation failed for {}: {}", key, e);
            }
        }
    }
}
