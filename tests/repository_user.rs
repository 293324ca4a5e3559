#![cfg(feature = "db-tests")]

mod common;

use category_service::application::services::auth_service::hash_token;
use category_service::domain::entities::NewUser;
use category_service::domain::repositories::UserRepository;
use category_service::error::AppError;
use category_service::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_token_hash(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ops", true, "ops-token").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .find_by_token_hash(&hash_token(common::TEST_SECRET, "ops-token"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, id);
    assert!(user.is_admin);
    assert!(user.last_used_at.is_none());
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ops", false, "ops-token").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.update_last_used(id).await.unwrap();

    let users = repo.list().await.unwrap();
    assert!(users[0].last_used_at.is_some());
}

#[sqlx::test]
async fn test_create_duplicate_token_conflicts(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let new_user = || NewUser {
        name: "Twin".to_string(),
        is_admin: false,
        token_hash: hash_token(common::TEST_SECRET, "same-token"),
    };

    repo.create(new_user()).await.unwrap();
    let result = repo.create(new_user()).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}
