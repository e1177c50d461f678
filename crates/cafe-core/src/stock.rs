//! # Stock Book
//!
//! The inventory master: one [`StockItem`] per SKU.
//!
//! Two kinds of writers touch it:
//! - the inventory ledger, when a receipt depletes stock
//! - the inventory editor (add/edit a SKU, nudge on-hand), independent of sales
//!
//! Lookups are linear. A cafe carries tens of SKUs, and keeping a `Vec`
//! preserves the order the inventory table shows them in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::StockItem;

/// What [`StockBook::upsert`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// Ordered collection of stock items, unique by SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockBook {
    items: Vec<StockItem>,
}

impl StockBook {
    /// Builds a book from seed items. Later duplicates of a SKU replace
    /// earlier ones.
    pub fn new(items: impl IntoIterator<Item = StockItem>) -> Self {
        let mut book = StockBook::default();
        for item in items {
            book.upsert(item);
        }
        book
    }

    #[inline]
    pub fn items(&self) -> &[StockItem] {
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

    pub fn get(&self, sku: &str) -> Option<&StockItem> {
        self.items.iter().find(|s| s.sku == sku)
    }

    pub fn get_mut(&mut self, sku: &str) -> Option<&mut StockItem> {
        self.items.iter_mut().find(|s| s.sku == sku)
    }

    /// On-hand for `sku`, if the SKU is stocked.
    pub fn on_hand(&self, sku: &str) -> Option<i64> {
        self.get(sku).map(|s| s.on_hand)
    }

    /// Inserts a new SKU at the end, or replaces the existing record in place.
    pub fn upsert(&mut self, item: StockItem) -> Upsert {
        match self.get_mut(&item.sku) {
            Some(existing) => {
                *existing = item;
                Upsert::Updated
            }
            None => {
                self.items.push(item);
                Upsert::Inserted
            }
        }
    }

    /// Adds `delta` to on-hand, clamping at zero. Returns the new on-hand.
    ///
    /// ## Errors
    /// [`CoreError::StockItemNotFound`] for an unknown SKU.
    pub fn adjust_on_hand(&mut self, sku: &str, delta: i64) -> CoreResult<i64> {
        self.get_mut(sku)
            .map(|item| item.apply_delta(delta))
            .ok_or_else(|| CoreError::StockItemNotFound(sku.to_string()))
    }

    /// Items whose name or SKU contains `query`, case-insensitively.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&StockItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || s.item.to_lowercase().contains(&needle)
                    || s.sku.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Items at or below their reorder point.
    pub fn needing_reorder(&self) -> Vec<&StockItem> {
        self.items.iter().filter(|s| s.needs_reorder()).collect()
    }
}

impl FromIterator<StockItem> for StockBook {
    fn from_iter<I: IntoIterator<Item = StockItem>>(iter: I) -> Self {
        StockBook::new(iter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
