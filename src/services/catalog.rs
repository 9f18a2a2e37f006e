//! Catalog service
//!
//! Business logic behind the admin dashboard's three tabs: adding categories,
//! sub-categories and items. Everything is stored as documents through the
//! backend.

use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::backend::{list_as, read_as, write_as, Backend};
use crate::error::{ShopError, ShopResult};
use crate::models::{Category, CategoryId, Item, Price, SubCategory, SubCategoryId};

/// Collection holding [`Category`] documents
pub const CATEGORIES: &str = "categories";
/// Collection holding [`SubCategory`] documents
pub const SUB_CATEGORIES: &str = "subCategories";
/// Collection holding [`Item`] documents
pub const ITEMS: &str = "items";

/// Input for [`CatalogService::add_item`]
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub sub_category_id: SubCategoryId,
    pub price: Price,
    pub stock: u32,
    pub description: String,
}

/// A sub-category with its items
#[derive(Debug, Clone)]
pub struct SubCategoryWithItems {
    pub sub_category: SubCategory,
    pub items: Vec<Item>,
}

/// A category with its sub-categories and their items
#[derive(Debug, Clone)]
pub struct CategoryTree {
    pub category: Category,
    pub sub_categories: Vec<SubCategoryWithItems>,
}

/// Service for catalog management
pub struct CatalogService<'a, B: Backend + ?Sized> {
    backend: &'a B,
    audit: Option<&'a AuditLogger>,
}

impl<'a, B: Backend + ?Sized> CatalogService<'a, B> {
    /// Create a new catalog service
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            audit: None,
        }
    }

    /// Record every create in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    fn record(&self, entry: AuditEntry) -> ShopResult<()> {
        match self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    // === Categories ===

    /// Create a new category
    pub fn add_category(&self, name: &str, description: &str) -> ShopResult<Category> {
        let name = name.trim();
        if self.get_category_by_name(name)?.is_some() {
            return Err(ShopError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let mut category = Category::new(name);
        category.description = description.trim().to_string();
        category
            .validate()
            .map_err(|e| ShopError::Validation(format!("Category: {}", e)))?;

        write_as(self.backend, CATEGORIES, &category.id.key(), &category)?;
        self.record(AuditEntry::create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        ))?;
        debug!(id = %category.id, name = %category.name, "added category");

        Ok(category)
    }

    /// List all categories, sorted by name
    pub fn list_categories(&self) -> ShopResult<Vec<Category>> {
        let mut categories: Vec<Category> = list_as(self.backend, CATEGORIES)?;
        categories.sort_by_key(|c| c.name.to_lowercase());
        Ok(categories)
    }

    /// Get a category by ID
    pub fn get_category(&self, id: CategoryId) -> ShopResult<Option<Category>> {
        read_as(self.backend, CATEGORIES, &id.key())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_category_by_name(&self, name: &str) -> ShopResult<Option<Category>> {
        let name = name.trim().to_lowercase();
        Ok(self
            .list_categories()?
            .into_iter()
            .find(|c| c.name.to_lowercase() == name))
    }

    /// Find a category by name or ID string
    pub fn find_category(&self, identifier: &str) -> ShopResult<Option<Category>> {
        if let Some(category) = self.get_category_by_name(identifier)? {
            return Ok(Some(category));
        }
        match identifier.trim().parse::<CategoryId>() {
            Ok(id) => self.get_category(id),
            Err(_) => Ok(None),
        }
    }

    // === Sub-categories ===

    /// Create a sub-category inside an existing category
    pub fn add_sub_category(&self, name: &str, category_id: CategoryId) -> ShopResult<SubCategory> {
        let name = name.trim();
        let category = self
            .get_category(category_id)?
            .ok_or_else(|| ShopError::category_not_found(category_id.to_string()))?;

        let name_lower = name.to_lowercase();
        if self
            .list_sub_categories(category_id)?
            .iter()
            .any(|s| s.name.to_lowercase() == name_lower)
        {
            return Err(ShopError::Duplicate {
                entity_type: "SubCategory",
                identifier: format!("{} / {}", category.name, name),
            });
        }

        let sub_category = SubCategory::new(name, category_id);
        sub_category
            .validate()
            .map_err(|e| ShopError::Validation(format!("SubCategory: {}", e)))?;

        write_as(
            self.backend,
            SUB_CATEGORIES,
            &sub_category.id.key(),
            &sub_category,
        )?;
        self.record(AuditEntry::create(
            EntityType::SubCategory,
            sub_category.id.to_string(),
            Some(format!("{} / {}", category.name, sub_category.name)),
            &sub_category,
        ))?;

        Ok(sub_category)
    }

    /// List the sub-categories of one category, sorted by name
    pub fn list_sub_categories(&self, category_id: CategoryId) -> ShopResult<Vec<SubCategory>> {
        let mut subs: Vec<SubCategory> = list_as::<SubCategory, _>(self.backend, SUB_CATEGORIES)?
            .into_iter()
            .filter(|s| s.category_id == category_id)
            .collect();
        subs.sort_by_key(|s| s.name.to_lowercase());
        Ok(subs)
    }

    /// Get a sub-category by ID
    pub fn get_sub_category(&self, id: SubCategoryId) -> ShopResult<Option<SubCategory>> {
        read_as(self.backend, SUB_CATEGORIES, &id.key())
    }

    /// Find a sub-category by name or ID string
    ///
    /// Names are only unique within a category; pass `category_id` to pick
    /// one when the same name exists in several categories.
    pub fn find_sub_category(
        &self,
        identifier: &str,
        category_id: Option<CategoryId>,
    ) -> ShopResult<Option<SubCategory>> {
        let name = identifier.trim().to_lowercase();
        let matches: Vec<SubCategory> = list_as::<SubCategory, _>(self.backend, SUB_CATEGORIES)?
            .into_iter()
            .filter(|s| s.name.to_lowercase() == name)
            .filter(|s| category_id.map_or(true, |id| s.category_id == id))
            .collect();

        match matches.len() {
            0 => match identifier.trim().parse::<SubCategoryId>() {
                Ok(id) => self.get_sub_category(id),
                Err(_) => Ok(None),
            },
            1 => Ok(matches.into_iter().next()),
            n => Err(ShopError::Validation(format!(
                "Sub-category name '{}' exists in {} categories; specify the category",
                identifier.trim(),
                n
            ))),
        }
    }

    // === Items ===

    /// Create an item inside an existing sub-category
    pub fn add_item(&self, input: NewItem) -> ShopResult<Item> {
        let name = input.name.trim();
        let sub_category = self
            .get_sub_category(input.sub_category_id)?
            .ok_or_else(|| ShopError::sub_category_not_found(input.sub_category_id.to_string()))?;

        let name_lower = name.to_lowercase();
        if self
            .list_items(sub_category.id)?
            .iter()
            .any(|i| i.name.to_lowercase() == name_lower)
        {
            return Err(ShopError::Duplicate {
                entity_type: "Item",
                identifier: format!("{} / {}", sub_category.name, name),
            });
        }

        let mut item = Item::new(name, sub_category.id, input.price);
        item.stock = input.stock;
        item.description = input.description.trim().to_string();
        item.validate()
            .map_err(|e| ShopError::Validation(format!("Item: {}", e)))?;

        write_as(self.backend, ITEMS, &item.id.key(), &item)?;
        self.record(AuditEntry::create(
            EntityType::Item,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        ))?;

        Ok(item)
    }

    /// List the items of one sub-category, sorted by name
    pub fn list_items(&self, sub_category_id: SubCategoryId) -> ShopResult<Vec<Item>> {
        let mut items: Vec<Item> = list_as::<Item, _>(self.backend, ITEMS)?
            .into_iter()
            .filter(|i| i.sub_category_id == sub_category_id)
            .collect();
        items.sort_by_key(|i| i.name.to_lowercase());
        Ok(items)
    }

    /// The whole catalog as a tree
    pub fn catalog_tree(&self) -> ShopResult<Vec<CategoryTree>> {
        let mut tree = Vec::new();
        for category in self.list_categories()? {
            let mut sub_categories = Vec::new();
            for sub_category in self.list_sub_categories(category.id)? {
                let items = self.list_items(sub_category.id)?;
                sub_categories.push(SubCategoryWithItems {
                    sub_category,
                    items,
                });
            }
            tree.push(CategoryTree {
                category,
                sub_categories,
            });
        }
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::local::tests::open_backend;
    use tempfile::TempDir;

    fn new_item(name: &str, sub_category_id: SubCategoryId) -> NewItem {
        NewItem {
            name: name.to_string(),
            sub_category_id,
            price: Price::from_minor(2500),
            stock: 4,
            description: String::new(),
        }
    }

    #[test]
    fn test_add_and_find_category() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        let category = service.add_category("  Electronics ", "Gadgets").unwrap();
        assert_eq!(category.name, "Electronics");
        assert_eq!(category.description, "Gadgets");

        assert!(service.find_category("electronics").unwrap().is_some());
        assert!(service
            .find_category(&category.id.key())
            .unwrap()
            .is_some());
        assert!(service.find_category("Books").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        service.add_category("Books", "").unwrap();
        let err = service.add_category("BOOKS", "").unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_empty_category_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        assert!(service.add_category("   ", "").unwrap_err().is_validation());
    }

    #[test]
    fn test_sub_category_requires_category() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        let err = service
            .add_sub_category("Phones", CategoryId::new())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_sub_category_names_unique_per_category() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        let men = service.add_category("Men", "").unwrap();
        let women = service.add_category("Women", "").unwrap();

        service.add_sub_category("Shoes", men.id).unwrap();
        service.add_sub_category("Shoes", women.id).unwrap();
        assert!(service
            .add_sub_category("shoes", men.id)
            .unwrap_err()
            .is_duplicate());

        // Ambiguous without a category, resolvable with one
        assert!(service.find_sub_category("Shoes", None).is_err());
        let found = service
            .find_sub_category("Shoes", Some(women.id))
            .unwrap()
            .unwrap();
        assert_eq!(found.category_id, women.id);
    }

    #[test]
    fn test_add_item_and_tree() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        let category = service.add_category("Electronics", "").unwrap();
        let phones = service.add_sub_category("Phones", category.id).unwrap();
        service.add_item(new_item("Pixel", phones.id)).unwrap();
        service.add_item(new_item("Galaxy", phones.id)).unwrap();

        assert!(service
            .add_item(new_item("pixel", phones.id))
            .unwrap_err()
            .is_duplicate());

        let tree = service.catalog_tree().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].sub_categories.len(), 1);
        let names: Vec<&str> = tree[0].sub_categories[0]
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Galaxy", "Pixel"]);
        assert_eq!(tree[0].sub_categories[0].items[0].stock, 4);
    }

    #[test]
    fn test_item_requires_sub_category() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let service = CatalogService::new(&backend);

        let err = service
            .add_item(new_item("Orphan", SubCategoryId::new()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_creates_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let service = CatalogService::new(&backend).with_audit(&logger);

        let category = service.add_category("Toys", "").unwrap();
        service.add_sub_category("Puzzles", category.id).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Category);
        assert_eq!(entries[1].entity_name.as_deref(), Some("Toys / Puzzles"));
    }
}
