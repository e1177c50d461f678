//! # Seed Data
//!
//! The menu and opening stock a fresh register starts with.

use cafe_core::catalog::Catalog;
use cafe_core::stock::StockBook;
use cafe_core::{CatalogItem, Money, StockItem};

fn menu_item(id: &str, sku: &str, name: &str, category: &str, cents: i64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_cents(cents),
    }
}

/// The house menu.
pub fn default_menu() -> Catalog {
    Catalog::new(vec![
        menu_item("m1", "CF-ESP", "Espresso", "Coffee", 350),
        menu_item("m2", "CF-LAT", "Cafe Latte", "Coffee", 450),
        menu_item("m3", "CF-CAP", "Cappuccino", "Coffee", 425),
        menu_item("m4", "TE-MAS", "Masala Chai", "Tea", 250),
        menu_item("m5", "TE-GRN", "Green Tea", "Tea", 225),
        menu_item("m6", "BK-CRS", "Butter Croissant", "Bakery", 300),
        menu_item("m7", "BK-MUF", "Blueberry Muffin", "Bakery", 275),
    ])
}

/// Opening inventory. Menu SKUs without a record here are sold untracked.
pub fn initial_stock() -> StockBook {
    StockBook::new([
        StockItem {
            sku: "CF-ESP".to_string(),
            item: "Espresso Beans 1kg".to_string(),
            on_hand: 20,
            uom: "bag".to_string(),
            reorder: 5,
            cost: Money::from_cents(1200),
            supplier: "Bean Bros".to_string(),
        },
        StockItem {
            sku: "BK-CRS".to_string(),
            item: "Butter Croissant".to_string(),
            on_hand: 24,
            uom: "pcs".to_string(),
            reorder: 6,
            cost: Money::from_cents(110),
            supplier: "Morning Bakery".to_string(),
        },
    ])
}
