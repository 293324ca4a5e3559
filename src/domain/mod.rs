//! Domain layer containing business entities and rules.
//!
//! Defines entities, repository interfaces, and the authorization policy
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`policy`] - Capability check deciding who may perform which action
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Use cases are orchestrated in services (see [`crate::application::services`])

pub mod entities;
pub mod policy;
pub mod repositories;
