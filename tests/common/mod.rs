#![allow(dead_code)]

use category_service::application::services::auth_service::hash_token;
use category_service::application::services::{AuthService, CategoryService};
use category_service::infrastructure::cache::NullCache;
use category_service::infrastructure::persistence::{PgCategoryRepository, PgUserRepository};
use category_service::state::AppState;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

/// Full stored category row: `(id, name, description, created_at, updated_at)`.
pub type CategorySnapshot = (i64, String, String, DateTime<Utc>, DateTime<Utc>);

pub const TEST_SECRET: &str = "test-signing-secret";
pub const ADMIN_TOKEN: &str = "admin-test-token";
pub const CUSTOMER_TOKEN: &str = "customer-test-token";

pub async fn create_test_user(pool: &PgPool, name: &str, is_admin: bool, token: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (name, is_admin, token_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(is_admin)
    .bind(hash_token(TEST_SECRET, token))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seeds one admin and one customer, reachable through [`ADMIN_TOKEN`] and [`CUSTOMER_TOKEN`].
pub async fn seed_users(pool: &PgPool) {
    create_test_user(pool, "Admin", true, ADMIN_TOKEN).await;
    create_test_user(pool, "Customer", false, CUSTOMER_TOKEN).await;
}

pub async fn create_test_category(pool: &PgPool, name: &str, description: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_image(pool: &PgPool, path: &str, owner_type: &str, owner_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO images (path, imageable_type, imageable_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(path)
    .bind(owner_type)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_product(pool: &PgPool, name: &str, category_id: i64) -> i64 {
    let product_id: i64 = sqlx::query_scalar("INSERT INTO products (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO category_product (category_id, product_id) VALUES ($1, $2)")
        .bind(category_id)
        .bind(product_id)
        .execute(pool)
        .await
        .unwrap();

    product_id
}

/// Returns `(name, description)` of a stored category, if any.
pub async fn fetch_category(pool: &PgPool, id: i64) -> Option<(String, String)> {
    sqlx::query_as("SELECT name, description FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

/// Every stored category, ordered by id.
pub async fn snapshot_categories(pool: &PgPool) -> Vec<CategorySnapshot> {
    sqlx::query_as(
        "SELECT id, name, description, created_at, updated_at FROM categories ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

/// Snapshot with one id left out.
pub fn without(rows: Vec<CategorySnapshot>, id: i64) -> Vec<CategorySnapshot> {
    rows.into_iter().filter(|row| row.0 != id).collect()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool));

    let cache = Arc::new(NullCache::new());
    let category_service = Arc::new(CategoryService::new(category_repo, cache.clone()));
    let auth_service = Arc::new(AuthService::new(user_repo, TEST_SECRET.to_string()));

    AppState::new(category_service, auth_service, cache)
}
