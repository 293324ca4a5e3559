//! Application layer services implementing the use cases.
//!
//! Services orchestrate authorization, validation, repository calls, and
//! cache maintenance, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::category_service::CategoryService`] - Category listing and administration
//! - [`services::auth_service::AuthService`] - Token authentication and user issuing

pub mod services;
