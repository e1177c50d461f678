//! # Inventory Ledger
//!
//! Applies completed receipts to stock and keeps the movement audit log.
//!
//! ## Receipt Application
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt R7K2QZM                     Stock (before → after)             │
//! │  ───────────────                     ──────────────────────             │
//! │  CF-ESP   × 2  ────────────────────► CF-ESP   20 → 18                   │
//! │  MILK-1L  × 5  ────────────────────► MILK-1L   1 →  0  (clamped)        │
//! │  GIFT-BOX × 1  ────────────────────► (no stock record: skipped)         │
//! │                                                                         │
//! │  Movements (one per line, every line):                                  │
//! │    CF-ESP  -2 Sale · MILK-1L -5 Sale · GIFT-BOX -1 Sale                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Idempotent
//! Applying the same receipt twice depletes stock twice. The coordinator
//! applies each receipt exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::stock::StockBook;
use crate::types::{Movement, MovementReason, Receipt};

// =============================================================================
// Movement Log
// =============================================================================

/// Append-only movement history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementLog {
    entries: Vec<Movement>,
}

impl MovementLog {
    pub fn new() -> Self {
        MovementLog::default()
    }

    /// Newest first.
    #[inline]
    pub fn entries(&self) -> &[Movement] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Puts a batch in front of the existing history, keeping the batch's
    /// own order.
    pub fn prepend(&mut self, batch: &[Movement]) {
        self.entries.splice(0..0, batch.iter().cloned());
    }

    /// Movements for one SKU, newest first.
    pub fn for_sku<'a>(&'a self, sku: &'a str) -> impl Iterator<Item = &'a Movement> + 'a {
        self.entries.iter().filter(move |m| m.sku == sku)
    }

    /// Net signed quantity recorded for one SKU.
    pub fn net_quantity(&self, sku: &str) -> i64 {
        self.for_sku(sku)
            .fold(0i64, |net, m| net.saturating_add(m.qty))
    }
}

// =============================================================================
// Receipt Application
// =============================================================================

/// Result of applying one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerApplication {
    /// Stock after depletion.
    pub updated_stock: StockBook,

    /// One Sale movement per receipt line, in line order.
    pub new_movements: Vec<Movement>,

    /// Line SKUs with no stock record; their stock update was skipped.
    pub unmatched_skus: Vec<String>,
}

/// Applies `receipt` to `stock`, stamping movements with the current time.
pub fn apply(receipt: &Receipt, stock: &StockBook) -> LedgerApplication {
    apply_at(receipt, stock, Utc::now())
}

/// Applies `receipt` to `stock` with an explicit timestamp.
///
/// For each line, the matching SKU's on-hand becomes
/// `max(0, on_hand - qty)`. Lines with no matching SKU leave stock alone but
/// still produce their Sale movement.
pub fn apply_at(receipt: &Receipt, stock: &StockBook, now: DateTime<Utc>) -> LedgerApplication {
    let mut updated_stock = stock.clone();
    let mut new_movements = Vec::with_capacity(receipt.lines.len());
    let mut unmatched_skus = Vec::new();

    for line in &receipt.lines {
        match updated_stock.get_mut(&line.sku) {
            Some(item) => {
                item.apply_delta(-line.qty);
            }
            None => unmatched_skus.push(line.sku.clone()),
        }

        new_movements.push(Movement {
            id: Uuid::new_v4().to_string(),
            date: now,
            sku: line.sku.clone(),
            item: line.name.clone(),
            qty: -line.qty,
            reason: MovementReason::Sale,
        });
    }

    LedgerApplication {
        updated_stock,
        new_movements,
        unmatched_skus,
    }
}

// =============================================================================
// Manual Entries
// =============================================================================

/// Adjusts on-hand by `delta` for a non-sale reason and returns the movement
/// describing it. On-hand clamps at zero; the movement records the requested
/// delta.
///
/// ## Errors
/// [`CoreError::StockItemNotFound`] for an unknown SKU; nothing is recorded.
pub fn record_adjustment(
    stock: &mut StockBook,
    sku: &str,
    delta: i64,
    reason: MovementReason,
    now: DateTime<Utc>,
) -> CoreResult<Movement> {
    let item = stock
        .get_mut(sku)
        .ok_or_else(|| CoreError::StockItemNotFound(sku.to_string()))?;
    item.apply_delta(delta);

    Ok(Movement {
        id: Uuid::new_v4().to_string(),
        date: now,
        sku: sku.to_string(),
        item: item.item.clone(),
        qty: delta,
        reason,
    })
}

/// Builds a movement entry without touching on-hand, as the stock
/// movements screen does. The item name falls back to the SKU when the SKU
/// is not stocked.
pub fn record_movement(
    stock: &StockBook,
    sku: &str,
    qty: i64,
    reason: MovementReason,
    now: DateTime<Utc>,
) -> Movement {
    let item = stock
        .get(sku)
        .map(|s| s.item.clone())
        .unwrap_or_else(|| sku.to_string());

    Movement {
        id: Uuid::new_v4().to_string(),
        date: now,
        sku: sku.to_string(),
        item,
        qty,
        reason,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
