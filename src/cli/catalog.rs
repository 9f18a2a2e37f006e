//! Catalog CLI commands
//!
//! The admin dashboard's "Add Category", "Add Sub-Category" and "Add Items"
//! tabs as subcommands, plus a tree listing.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::backend::Backend;
use crate::display::{format_catalog_tree, format_item_line};
use crate::error::{ShopError, ShopResult};
use crate::models::Price;
use crate::services::{CatalogService, NewItem};

/// Currency prefix used when printing prices
const CURRENCY: &str = "Rs ";

/// Catalog subcommands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Show the whole catalog as a tree
    List,

    /// Create a new category
    #[command(name = "add-category")]
    AddCategory {
        /// Category name
        name: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Create a sub-category inside a category
    #[command(name = "add-subcategory")]
    AddSubcategory {
        /// Sub-category name
        name: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
    },

    /// Create an item inside a sub-category
    #[command(name = "add-item")]
    AddItem {
        /// Item name
        name: String,
        /// Sub-category name or ID
        #[arg(short, long)]
        subcategory: String,
        /// Category name or ID, when the sub-category name is not unique
        #[arg(short, long)]
        category: Option<String>,
        /// Price (e.g., "499" or "499.99")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        price: String,
        /// Units in stock
        #[arg(long, default_value_t = 0)]
        stock: u32,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

/// Handle a catalog command
pub fn handle_catalog_command<B: Backend + ?Sized>(
    backend: &B,
    audit: Option<&AuditLogger>,
    cmd: CatalogCommands,
) -> ShopResult<()> {
    let mut service = CatalogService::new(backend);
    if let Some(logger) = audit {
        service = service.with_audit(logger);
    }

    match cmd {
        CatalogCommands::List => {
            let tree = service.catalog_tree()?;
            print!("{}", format_catalog_tree(&tree, CURRENCY));
        }

        CatalogCommands::AddCategory { name, description } => {
            let category = service.add_category(&name, &description)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CatalogCommands::AddSubcategory { name, category } => {
            let parent = service
                .find_category(&category)?
                .ok_or_else(|| ShopError::category_not_found(&category))?;

            let sub = service.add_sub_category(&name, parent.id)?;
            println!("Created sub-category: {}", sub.name);
            println!("  Category: {}", parent.name);
            println!("  ID: {}", sub.id);
        }

        CatalogCommands::AddItem {
            name,
            subcategory,
            category,
            price,
            stock,
            description,
        } => {
            let category_id = match category {
                Some(category) => Some(
                    service
                        .find_category(&category)?
                        .ok_or_else(|| ShopError::category_not_found(&category))?
                        .id,
                ),
                None => None,
            };

            let sub = service
                .find_sub_category(&subcategory, category_id)?
                .ok_or_else(|| ShopError::sub_category_not_found(&subcategory))?;

            let price = Price::parse(&price)
                .map_err(|e| ShopError::Validation(format!("Invalid price: {}", e)))?;

            let item = service.add_item(NewItem {
                name,
                sub_category_id: sub.id,
                price,
                stock,
                description,
            })?;
            println!("Created item: {}", format_item_line(&item, CURRENCY));
            println!("  Sub-category: {}", sub.name);
            println!("  ID: {}", item.id);
        }
    }

    Ok(())
}
