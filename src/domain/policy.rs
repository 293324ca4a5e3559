//! Role-based authorization for catalog actions.
//!
//! Reads are open to any authenticated principal; every mutation needs the
//! admin role.

use serde_json::json;

use crate::domain::entities::Principal;
use crate::error::AppError;

/// Actions a principal can attempt on categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListCategories,
    ViewCategory,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListCategories => "categories.list",
            Action::ViewCategory => "categories.view",
            Action::CreateCategory => "categories.create",
            Action::UpdateCategory => "categories.update",
            Action::DeleteCategory => "categories.delete",
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Action::CreateCategory | Action::UpdateCategory | Action::DeleteCategory
        )
    }
}

/// Returns whether `principal` may perform `action`.
pub fn is_allowed(principal: &Principal, action: Action) -> bool {
    !action.is_write() || principal.is_admin()
}

/// Checks that `principal` may perform `action`.
///
/// # Errors
///
/// Returns [`AppError::Forbidden`] when the action is denied. The error never
/// mentions the target record.
pub fn authorize(principal: &Principal, action: Action) -> Result<(), AppError> {
    if is_allowed(principal, action) {
        return Ok(());
    }

    tracing::warn!(
        user_id = principal.user_id,
        action = action.as_str(),
        "Authorization denied"
    );

    Err(AppError::forbidden(
        "This action is unauthorized",
        json!({ "action": action.as_str() }),
    ))
}
