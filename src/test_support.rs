//! Helpers shared by in-crate HTTP tests.

use std::sync::Arc;

use crate::application::services::{AuthService, CategoryService};
use crate::domain::entities::{Principal, Role};
use crate::domain::repositories::{MockCategoryRepository, MockUserRepository};
use crate::infrastructure::cache::MockCacheService;
use crate::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn admin() -> Principal {
    Principal::new(1, "admin", Role::Admin)
}

pub fn customer() -> Principal {
    Principal::new(2, "customer", Role::Customer)
}

pub fn state_with(
    categories: MockCategoryRepository,
    users: MockUserRepository,
    cache: MockCacheService,
) -> AppState {
    let cache = Arc::new(cache);
    let category_service = Arc::new(CategoryService::new(Arc::new(categories), cache.clone()));
    let auth_service = Arc::new(AuthService::new(Arc::new(users), TEST_SECRET.to_string()));

    AppState::new(category_service, auth_service, cache)
}

pub fn state(categories: MockCategoryRepository, cache: MockCacheService) -> AppState {
    state_with(categories, MockUserRepository::new(), cache)
}
