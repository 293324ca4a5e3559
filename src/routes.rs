//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Health check: DB and cache (public)
//! - `/categories`, `/categories/{id}` - Category resource (token or cookie required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token or `auth_token` cookie, resolved to a principal
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
pub fn router(state: AppState) -> Router {
    let categories = api::routes::category_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(categories)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::auth_service::hash_token;
    use crate::domain::entities::{Category, User};
    use crate::domain::repositories::{MockCategoryRepository, MockUserRepository};
    use crate::infrastructure::cache::MockCacheService;
    use crate::test_support::{TEST_SECRET, state_with};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn user_with_token(is_admin: bool, token: &str) -> User {
        User {
            id: 7,
            name: "Dana".to_string(),
            is_admin,
            token_hash: hash_token(TEST_SECRET, token),
            last_used_at: None,
            created_at: Utc::now(),
        }
    }

    fn users_accepting(token: &'static str, is_admin: bool) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        let user = user_with_token(is_admin, token);
        let expected_hash = user.token_hash.clone();
        users
            .expect_find_by_token_hash()
            .returning(move |hash| Ok((hash == expected_hash).then(|| user.clone())));
        users.expect_update_last_used().returning(|_| Ok(()));
        users
    }

    #[tokio::test]
    async fn test_categories_require_authentication() {
        let app = router(state_with(
            MockCategoryRepository::new(),
            MockUserRepository::new(),
            MockCacheService::new(),
        ));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/categories").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("www-authenticate"), "Bearer");
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let app = router(state_with(
            MockCategoryRepository::new(),
            users_accepting("good-token", true),
            MockCacheService::new(),
        ));
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/categories")
            .authorization_bearer("bad-token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_token_reaches_write_handler() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_create().times(1).returning(|fields| {
            Ok(Category::new(
                12,
                fields.name,
                fields.description,
                Utc::now(),
                Utc::now(),
            ))
        });
        let mut cache = MockCacheService::new();
        cache.expect_invalidate().returning(|_| Ok(()));

        let app = router(state_with(
            categories,
            users_accepting("admin-token", true),
            cache,
        ));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/categories")
            .authorization_bearer("admin-token")
            .json(&json!({ "name": "Boots", "description": "Winter boots" }))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/categories/12");
    }

    #[tokio::test]
    async fn test_cookie_token_as_customer_is_forbidden_to_write() {
        let app = router(state_with(
            MockCategoryRepository::new(),
            users_accepting("customer-token", false),
            MockCacheService::new(),
        ));
        let server = TestServer::new(app).unwrap();

        let response = server
            .delete("/categories/3")
            .add_header("cookie", "theme=dark; auth_token=customer-token")
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
