//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, CategoryService};
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        category_service: Arc<CategoryService>,
        auth_service: Arc<AuthService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            category_service,
            auth_service,
            cache,
        }
    }
}
