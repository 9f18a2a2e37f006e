//! Core data models for Shopfront
//!
//! Customer profiles created by sign-up and the admin-managed catalog.

pub mod catalog;
pub mod ids;
pub mod price;
pub mod user;

pub use catalog::{CatalogValidationError, Category, Item, SubCategory};
pub use ids::{CategoryId, ItemId, SubCategoryId, UserId};
pub use price::{Price, PriceParseError};
pub use user::{DateOfBirth, UserProfile};
