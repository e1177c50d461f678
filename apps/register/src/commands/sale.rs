//! # Sale Commands
//!
//! Checkout and the receipt/order history screens.

use cafe_core::{CoreError, Money, Movement, Receipt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::PosState;

/// Status shown on the orders screen. Every recorded receipt is complete.
pub const COMPLETED_STATUS: &str = "Completed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOrderResponse {
    pub receipt: Receipt,
    pub new_movements: Vec<Movement>,
    /// Receipt SKUs that had no stock record; sold untracked.
    pub unmatched_skus: Vec<String>,
}

/// One row of the orders screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub date: DateTime<Utc>,
    pub customer: String,
    /// Line names joined with ", ".
    pub items: String,
    pub total: Money,
    pub status: String,
}

impl From<&Receipt> for OrderRow {
    fn from(receipt: &Receipt) -> Self {
        OrderRow {
            id: receipt.id.clone(),
            date: receipt.date,
            customer: receipt.customer.clone(),
            items: receipt.item_summary(),
            total: receipt.totals.total,
            status: COMPLETED_STATUS.to_string(),
        }
    }
}

/// Completes the current order.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  complete_order                                                         │
/// │    │                                                                    │
/// │    ├── empty cart ──► Err(CART_ERROR), nothing changes                  │
/// │    │                                                                    │
/// │    ▼                                                                    │
/// │  coordinator.complete_order(&mut transaction)                           │
/// │    ├── receipt prepended to history                                     │
/// │    ├── stock depleted, Sale movements prepended                         │
/// │    └── cart cleared, tax back to the default                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn complete_order(pos: &PosState) -> Result<CompleteOrderResponse, ApiError> {
    debug!("complete_order command");

    let done = pos.with_session_mut(|s| s.coordinator.complete_order(&mut s.transaction))?;

    for sku in &done.unmatched_skus {
        warn!(receipt_id = %done.receipt.id, sku = %sku, "Sold SKU has no stock record");
    }

    info!(
        receipt_id = %done.receipt.id,
        total = %done.receipt.totals.total,
        items = done.receipt.total_quantity(),
        payment = %done.receipt.payment_method,
        "Order completed"
    );

    Ok(CompleteOrderResponse {
        receipt: done.receipt,
        new_movements: done.new_movements,
        unmatched_skus: done.unmatched_skus,
    })
}

/// Receipts, most recent first, optionally filtered by id or customer
/// (case-insensitive substring).
pub fn list_receipts(pos: &PosState, query: Option<&str>) -> Vec<Receipt> {
    debug!(query = query.unwrap_or(""), "list_receipts command");
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

    pos.with_session(|s| {
        s.transaction
            .receipts
            .receipts()
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.id.to_lowercase().contains(&needle)
                    || r.customer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    })
}

/// Gets one receipt for reprinting.
pub fn get_receipt(pos: &PosState, id: &str) -> Result<Receipt, ApiError> {
    debug!(id = %id, "get_receipt command");
    pos.with_session(|s| s.transaction.receipts.get(id).cloned())
        .ok_or_else(|| CoreError::ReceiptNotFound(id.to_string()).into())
}

/// Orders screen rows, optionally filtered by status ("All" or `None` for
/// every row).
pub fn list_orders(pos: &PosState, status: Option<&str>) -> Vec<OrderRow> {
    debug!(status = status.unwrap_or("All"), "list_orders command");

    pos.with_session(|s| {
        s.transaction
            .receipts
            .receipts()
            .iter()
            .map(OrderRow::from)
            .filter(|row| match status {
                None | Some("All") => true,
                Some(wanted) => row.status == wanted,
            })
            .collect()
    })
}
