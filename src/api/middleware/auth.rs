//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::COOKIE, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::entities::Principal;
use crate::{error::AppError, state::AppState};

/// Name of the cookie browsers can carry the token in.
pub const AUTH_COOKIE: &str = "auth_token";

/// Authenticates requests and attaches the [`Principal`] to the request.
///
/// # Token Sources
///
/// ```text
/// Authorization: Bearer <token>
/// Cookie: auth_token=<token>
/// ```
///
/// The header wins when both are present.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if no token
/// is supplied or the token matches no user.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/categories", get(category_index_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => cookie_token(&parts.headers),
    }
    .ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Authorization header or auth_token cookie is missing"}),
        )
    })?;

    let principal = st.auth_service.authenticate(&token).await?;
    parts.extensions.insert(principal);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extracts the `auth_token` value from the `Cookie` header, if present.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == AUTH_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Handlers take the acting principal as an argument.
///
/// Fails with `401` if the request did not pass through [`layer`].
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            AppError::unauthorized("Unauthorized", json!({"reason": "Not authenticated"}))
        })
    }
}
