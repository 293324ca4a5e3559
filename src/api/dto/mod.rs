//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field rules are
//! enforced by the domain input types the requests convert into.

pub mod category;
pub mod health;
