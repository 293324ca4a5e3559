//! Core domain entities of the catalog.
//!
//! Entities are plain data structures. Creation and mutation inputs live in
//! separate structs so that validation rules sit next to the data they guard:
//!
//! - [`Category`] / [`CategoryFields`] - the managed resource and its editable fields
//! - [`Product`] - read-only side of the category/product relation
//! - [`Image`] / [`ImageOwner`] - polymorphic attachment with an explicit owner tag
//! - [`User`] / [`Principal`] / [`Role`] - accounts and the per-request identity

pub mod category;
pub mod image;
pub mod product;
pub mod user;

pub use category::{Category, CategoryDetails, CategoryFields, CategoryWithImage};
pub use image::{Image, ImageOwner, OwnerKind};
pub use product::Product;
pub use user::{NewUser, Principal, Role, User};
