//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{
    Category, CategoryFields, CategoryWithImage, Image, ImageOwner, OwnerKind, Product,
};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category::new(r.id, r.name, r.description, r.created_at, r.updated_at)
    }
}

/// Category row joined with the first image owned by it.
#[derive(Debug, FromRow)]
struct CategoryImageRow {
    id: i64,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    image_id: Option<i64>,
    image_path: Option<String>,
}

impl From<CategoryImageRow> for CategoryWithImage {
    fn from(r: CategoryImageRow) -> Self {
        let image = match (r.image_id, r.image_path) {
            (Some(image_id), Some(path)) => Some(Image {
                id: image_id,
                path,
                owner: ImageOwner::category(r.id),
            }),
            _ => None,
        };

        CategoryWithImage {
            category: Category::new(r.id, r.name, r.description, r.created_at, r.updated_at),
            image,
        }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    path: String,
    imageable_id: i64,
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for categories.
///
/// Images are matched on `(imageable_type, imageable_id)` with the type tag
/// taken from [`OwnerKind::Category`]; there is no foreign key behind that pair.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_with_images(&self) -> Result<Vec<CategoryWithImage>, AppError> {
        let rows = sqlx::query_as::<_, CategoryImageRow>(
            r#"
            SELECT c.id, c.name, c.description, c.created_at, c.updated_at,
                   i.id AS image_id, i.path AS image_path
            FROM categories c
            LEFT JOIN LATERAL (
                SELECT id, path
                FROM images
                WHERE imageable_type = $1 AND imageable_id = c.id
                ORDER BY id
                LIMIT 1
            ) i ON TRUE
            ORDER BY c.id
            "#,
        )
        .bind(OwnerKind::Category.as_str())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CategoryWithImage::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Category::from))
    }

    async fn create(&self, fields: CategoryFields) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(fields.name)
        .bind(fields.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, fields: CategoryFields) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories SET
                name        = $2,
                description = $3,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(fields.name)
        .bind(fields.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Category::from)
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Category not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn find_image(&self, category_id: i64) -> Result<Option<Image>, AppError> {
        let row = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT id, path, imageable_id
            FROM images
            WHERE imageable_type = $1 AND imageable_id = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(OwnerKind::Category.as_str())
        .bind(category_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Image {
            id: r.id,
            path: r.path,
            owner: ImageOwner::category(r.imageable_id),
        }))
    }

    async fn list_products(&self, category_id: i64) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.created_at
            FROM products p
            JOIN category_product cp ON cp.product_id = p.id
            WHERE cp.category_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Product {
                id: r.id,
                name: r.name,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
