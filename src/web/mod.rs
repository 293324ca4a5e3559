//! HTML views for browsing categories.
//!
//! Server-side rendered with Askama templates from `templates/categories/`.
//! Pages are read-only; writes go through the JSON endpoints in
//! [`crate::api::handlers`].

pub mod handlers;
