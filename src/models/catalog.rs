//! Category, SubCategory and Item models
//!
//! The admin dashboard manages a three-level catalog: categories contain
//! sub-categories, sub-categories contain items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ItemId, SubCategoryId};
use super::price::Price;

/// Longest accepted catalog name, in characters
pub const MAX_NAME_LEN: usize = 50;

fn check_name(name: &str) -> Result<(), CatalogValidationError> {
    if name.trim().is_empty() {
        return Err(CatalogValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CatalogValidationError::NameTooLong(len));
    }
    Ok(())
}

/// A top-level product category (e.g., "Electronics")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        check_name(&self.name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A sub-category within a category (e.g., "Phones" under "Electronics")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubCategory {
    /// Create a new sub-category
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        let now = Utc::now();
        Self {
            id: SubCategoryId::new(),
            category_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        check_name(&self.name)
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A product listed under a sub-category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub sub_category_id: SubCategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, sub_category_id: SubCategoryId, price: Price) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            sub_category_id,
            name: name.into(),
            description: String::new(),
            price,
            stock: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        check_name(&self.name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

/// Validation errors for catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for CatalogValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Electronics");
        assert_eq!(category.name, "Electronics");
        assert!(category.description.is_empty());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(
            Category::new("   ").validate(),
            Err(CatalogValidationError::EmptyName)
        );
        assert_eq!(
            SubCategory::new("x".repeat(51), CategoryId::new()).validate(),
            Err(CatalogValidationError::NameTooLong(51))
        );
        assert!(SubCategory::new("x".repeat(50), CategoryId::new())
            .validate()
            .is_ok());
    }

    #[test]
    fn test_item() {
        let mut item = Item::new("Headphones", SubCategoryId::new(), Price::from_minor(4999));
        assert!(!item.is_in_stock());
        item.stock = 3;
        assert!(item.is_in_stock());
        assert_eq!(item.to_string(), "Headphones (49.99)");
    }

    #[test]
    fn test_item_deserializes_without_optional_fields() {
        let item = Item::new("Cable", SubCategoryId::new(), Price::from_minor(500));
        let mut json = serde_json::to_value(&item).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("description");
        obj.remove("stock");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back.stock, 0);
        assert!(back.description.is_empty());
    }
}
