//! # Catalog
//!
//! Read-only menu the order builder draws from.

use serde::{Deserialize, Serialize};

use crate::types::CatalogItem;

/// Category filter value that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Immutable list of catalog items, in menu order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|m| m.id == id)
    }

    /// Distinct categories in first-seen order, led by [`ALL_CATEGORIES`].
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Items in `category` (or any, for `None` / "All") whose name or SKU
    /// contains `query`, case-insensitively.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|m| match category {
                None => true,
                Some(c) => c == ALL_CATEGORIES || m.category == c,
            })
            .filter(|m| {
                m.name.to_lowercase().contains(&needle) || m.sku.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn menu() -> Catalog {
        let item = |id: &str, sku: &str, name: &str, category: &str, cents: i64| CatalogItem {
            id: id.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
        };
        Catalog::new(vec![
            item("m1", "CF-ESP", "Espresso", "Coffee", 350),
            item("m2", "CF-LAT", "Cafe Latte", "Coffee", 450),
            item("m3", "BK-CRS", "Butter Croissant", "Bakery", 300),
        ])
    }

    #[test]
    fn test_categories_are_distinct_and_ordered() {
        assert_eq!(menu().categories(), vec!["All", "Coffee", "Bakery"]);
    }

    #[test]
    fn test_search_by_name_sku_and_category() {
        let catalog = menu();

        assert_eq!(catalog.search("", None).len(), 3);
        assert_eq!(catalog.search("latte", None).len(), 1);
        assert_eq!(catalog.search("bk-", None).len(), 1);
        assert_eq!(catalog.search("", Some("Coffee")).len(), 2);
        assert_eq!(catalog.search("", Some("All")).len(), 3);
        assert!(catalog.search("croissant", Some("Coffee")).is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = menu();
        assert_eq!(catalog.get("m2").map(|m| m.sku.as_str()), Some("CF-LAT"));
        assert!(catalog.get("m9").is_none());
    }
}
