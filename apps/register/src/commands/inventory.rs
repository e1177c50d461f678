//! # Inventory Commands
//!
//! The inventory editor: browse, add/edit a SKU, nudge on-hand.
//!
//! These writes are independent of sales; the ledger is the only thing that
//! depletes stock on checkout.

use cafe_core::ledger;
use cafe_core::stock::Upsert;
use cafe_core::validation::{validate_delta, validate_search_query, validate_stock_item};
use cafe_core::{Movement, MovementReason, StockItem};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::PosState;

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    #[serde(flatten)]
    pub item: StockItem,
    /// On-hand at or below the reorder point.
    pub needs_reorder: bool,
}

impl From<&StockItem> for InventoryRow {
    fn from(item: &StockItem) -> Self {
        InventoryRow {
            item: item.clone(),
            needs_reorder: item.needs_reorder(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResponse {
    pub item: InventoryRow,
    /// False when an existing SKU was replaced.
    pub inserted: bool,
}

/// Stock items whose name or SKU matches `query`; empty matches all.
pub fn list_inventory(pos: &PosState, query: &str) -> Result<Vec<InventoryRow>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "list_inventory command");

    Ok(pos.with_session(|s| {
        s.transaction
            .stock
            .search(&query)
            .into_iter()
            .map(InventoryRow::from)
            .collect()
    }))
}

/// Items at or below their reorder point.
pub fn low_stock(pos: &PosState) -> Vec<InventoryRow> {
    debug!("low_stock command");
    pos.with_session(|s| {
        s.transaction
            .stock
            .needing_reorder()
            .into_iter()
            .map(InventoryRow::from)
            .collect()
    })
}

/// Adds a new SKU or replaces an existing one.
pub fn upsert_stock_item(pos: &PosState, item: StockItem) -> Result<UpsertResponse, ApiError> {
    debug!(sku = %item.sku, "upsert_stock_item command");
    validate_stock_item(&item)?;

    let row = InventoryRow::from(&item);
    let sku = item.sku.clone();
    let outcome = pos.with_session_mut(|s| s.transaction.stock.upsert(item));

    info!(sku = %sku, outcome = ?outcome, "Stock item saved");

    Ok(UpsertResponse {
        item: row,
        inserted: outcome == Upsert::Inserted,
    })
}

/// Adds `delta` to a SKU's on-hand (clamped at zero) and logs the movement.
///
/// ## Arguments
/// * `reason` - Movement reason label ("Purchase", "Waste/Spoilage", ...)
pub fn adjust_stock(
    pos: &PosState,
    sku: &str,
    delta: i64,
    reason: &str,
) -> Result<Movement, ApiError> {
    debug!(sku = %sku, delta, reason = %reason, "adjust_stock command");
    validate_delta(delta)?;
    let reason: MovementReason = reason.parse()?;

    let (movement, on_hand) = pos.with_session_mut(|s| {
        let movement =
            ledger::record_adjustment(&mut s.transaction.stock, sku, delta, reason, Utc::now())?;
        s.transaction.movements.prepend(std::slice::from_ref(&movement));
        let on_hand = s.transaction.stock.on_hand(sku).unwrap_or_default();
        Ok::<_, ApiError>((movement, on_hand))
    })?;

    info!(sku = %sku, delta, on_hand, reason = %reason, "Stock adjusted");
    Ok(movement)
}
