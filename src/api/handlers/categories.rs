//! Handlers for category write endpoints.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::api::dto::category::{CategoryItem, CategoryRequest};
use crate::api::extract::AppJson;
use crate::domain::entities::Principal;
use crate::domain::policy::{Action, authorize};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a category.
///
/// # Endpoint
///
/// `POST /categories`
///
/// # Request Body
///
/// ```json
/// { "name": "New Category", "description": "New Description" }
/// ```
///
/// # Response
///
/// `303 See Other` with `Location: /categories/{id}`.
///
/// # Errors
///
/// Returns 403 if the principal is not an admin, whatever the body.
/// Returns 400 if the body is not JSON.
/// Returns 422 with per-field messages if a field is blank.
pub async fn create_category_handler(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<AppJson<CategoryRequest>, AppError>,
) -> Result<Redirect, AppError> {
    authorize(&principal, Action::CreateCategory)?;
    let AppJson(payload) = payload?;

    let category = state
        .category_service
        .create_category(&principal, payload.into())
        .await?;

    Ok(Redirect::to(&format!("/categories/{}", category.id)))
}

/// Updates name and description of a category.
///
/// # Endpoint
///
/// `PATCH /categories/{id}`
///
/// # Errors
///
/// Returns 403 if the principal is not an admin, whatever the body.
/// Returns 400 if the body is not JSON.
/// Returns 404 if the category does not exist.
/// Returns 422 with per-field messages if a field is blank.
pub async fn update_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<AppJson<CategoryRequest>, AppError>,
) -> Result<Json<CategoryItem>, AppError> {
    authorize(&principal, Action::UpdateCategory)?;
    let AppJson(payload) = payload?;

    let category = state
        .category_service
        .update_category(&principal, id, payload.into())
        .await?;

    Ok(Json(category.into()))
}

/// Deletes a category.
///
/// # Endpoint
///
/// `DELETE /categories/{id}`
///
/// # Response
///
/// `303 See Other` back to the index.
///
/// # Errors
///
/// Returns 403 if the principal is not an admin.
/// Returns 404 if the category does not exist.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Redirect, AppError> {
    state
        .category_service
        .delete_category(&principal, id)
        .await?;

    Ok(Redirect::to("/categories"))
}
