//! Catalog display formatting
//!
//! Formats the category / sub-category / item hierarchy for terminal output.

use crate::models::Item;
use crate::services::CategoryTree;

/// Format the catalog as a tree
pub fn format_catalog_tree(tree: &[CategoryTree], currency: &str) -> String {
    if tree.is_empty() {
        return "No categories found.\n\nRun 'shopfront catalog add-category NAME' to create one."
            .to_string();
    }

    let mut output = String::new();

    for (i, node) in tree.iter().enumerate() {
        output.push_str(&node.category.name);
        if !node.category.description.is_empty() {
            output.push_str(&format!(" - {}", node.category.description));
        }
        output.push('\n');

        if node.sub_categories.is_empty() {
            output.push_str("  (no sub-categories)\n");
        }

        for (j, sub) in node.sub_categories.iter().enumerate() {
            let last_sub = j == node.sub_categories.len() - 1;
            let (branch, stem) = if last_sub {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            output.push_str(&format!("  {}{}\n", branch, sub.sub_category.name));

            for (k, item) in sub.items.iter().enumerate() {
                let leaf = if k == sub.items.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                output.push_str(&format!(
                    "  {}{}{}\n",
                    stem,
                    leaf,
                    format_item_line(item, currency)
                ));
            }
        }

        if i < tree.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// One item as "Name  Rs 10.00  (3 in stock)"
pub fn format_item_line(item: &Item, currency: &str) -> String {
    let stock = if item.is_in_stock() {
        format!("{} in stock", item.stock)
    } else {
        "out of stock".to_string()
    };
    format!(
        "{}  {}  ({})",
        item.name,
        item.price.format_with_symbol(currency),
        stock
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Price, SubCategory};
    use crate::services::SubCategoryWithItems;

    fn sample_tree() -> Vec<CategoryTree> {
        let category = Category::new("Electronics");
        let phones = SubCategory::new("Phones", category.id);
        let cables = SubCategory::new("Cables", category.id);
        let mut pixel = Item::new("Pixel", phones.id, Price::from_minor(49900));
        pixel.stock = 3;
        let usb = Item::new("USB-C", cables.id, Price::from_minor(999));

        vec![CategoryTree {
            category,
            sub_categories: vec![
                SubCategoryWithItems {
                    sub_category: cables,
                    items: vec![usb],
                },
                SubCategoryWithItems {
                    sub_category: phones,
                    items: vec![pixel],
                },
            ],
        }]
    }

    #[test]
    fn test_empty_tree() {
        assert!(format_catalog_tree(&[], "Rs ").starts_with("No categories found."));
    }

    #[test]
    fn test_tree_layout() {
        let output = format_catalog_tree(&sample_tree(), "Rs ");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Electronics");
        assert_eq!(lines[1], "  ├── Cables");
        assert_eq!(lines[2], "  │   └── USB-C  Rs 9.99  (out of stock)");
        assert_eq!(lines[3], "  └── Phones");
        assert_eq!(lines[4], "      └── Pixel  Rs 499.00  (3 in stock)");
    }

    #[test]
    fn test_category_without_children() {
        let mut category = Category::new("Toys");
        category.description = "For kids".into();
        let tree = vec![CategoryTree {
            category,
            sub_categories: Vec::new(),
        }];

        let output = format_catalog_tree(&tree, "$");
        assert!(output.contains("Toys - For kids"));
        assert!(output.contains("(no sub-categories)"));
    }
}
