//! Category route configuration.
//!
//! All routes here require an authenticated principal, see
//! [`crate::api::middleware::auth`]. Write operations are further restricted
//! to admins by the service layer.

use crate::api::handlers::{
    create_category_handler, delete_category_handler, update_category_handler,
};
use crate::state::AppState;
use crate::web::handlers::{category_index_handler, category_show_handler};
use axum::{Router, routing::get};

/// Category resource routes.
///
/// # Endpoints
///
/// - `GET    /categories`        - HTML index of all categories
/// - `POST   /categories`        - Create a category (admin)
/// - `GET    /categories/{id}`   - HTML detail page
/// - `PATCH  /categories/{id}`   - Update name and description (admin)
/// - `DELETE /categories/{id}`   - Delete a category (admin)
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(category_index_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(category_show_handler)
                .patch(update_category_handler)
                .delete(delete_category_handler),
        )
}
