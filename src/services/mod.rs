//! Service layer for Shopfront
//!
//! Services sit between the command handlers and the [`Backend`](crate::backend::Backend),
//! handling validation, uniqueness checks and audit logging.

pub mod auth;
pub mod catalog;
pub mod signup;

pub use auth::AuthService;
pub use catalog::{CatalogService, CategoryTree, NewItem, SubCategoryWithItems};
pub use signup::SignupService;
