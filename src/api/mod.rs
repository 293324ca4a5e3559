//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses
//! according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Body extractors with enveloped rejections
//! - [`handlers`] - HTTP request handlers for write operations and health
//! - [`middleware`] - Authentication and request tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
