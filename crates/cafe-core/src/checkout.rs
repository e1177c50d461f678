//! # Checkout Processor
//!
//! Converts a finalized cart into an immutable [`Receipt`].
//!
//! ```text
//! Order (mutable)                         Receipt (frozen)
//! ───────────────                         ────────────────
//! lines ──────────── clone ─────────────► lines
//! customer ───────── blank → "Walk-in" ─► customer
//! payment_method ─────────────────────►  payment_method
//! discount, tax_rate ─────────────────►  discount, tax_rate
//! (derived) ──────── totals::compute ───► totals
//!                    ReceiptIdGenerator ─► id    ("R" + 6 chars)
//!                    clock ─────────────► date
//! ```
//!
//! Checkout touches nothing but the receipt it returns. Stock depletion is
//! the ledger's job, sequenced by the coordinator.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::totals;
use crate::types::{Order, Receipt};
use crate::RECEIPT_ID_PREFIX;

const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random part of a receipt id.
pub const RECEIPT_SUFFIX_LEN: usize = 6;

// =============================================================================
// Receipt Ids
// =============================================================================

/// Source of receipt identifiers.
pub trait ReceiptIdGenerator: fmt::Debug + Send {
    /// Returns the id for the next receipt.
    fn next_id(&mut self) -> String;
}

/// `R` followed by six random base-36 characters, e.g. `R7K2QZM`.
///
/// ## Uniqueness
/// Best effort only: about 2.2 billion combinations, no collision check.
/// Use [`SequentialReceiptIds`] where ids must never repeat.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomReceiptIds;

impl ReceiptIdGenerator for RandomReceiptIds {
    fn next_id(&mut self) -> String {
        let mut bits = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(RECEIPT_ID_PREFIX.len() + RECEIPT_SUFFIX_LEN);
        id.push_str(RECEIPT_ID_PREFIX);
        for _ in 0..RECEIPT_SUFFIX_LEN {
            id.push(SUFFIX_ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        id
    }
}

/// Monotonic ids: `R000001`, `R000002`, ... Never repeats within a session.
#[derive(Debug, Default, Clone)]
pub struct SequentialReceiptIds {
    next: u64,
}

impl SequentialReceiptIds {
    /// Starts counting after `last_issued`.
    pub fn starting_after(last_issued: u64) -> Self {
        SequentialReceiptIds { next: last_issued }
    }
}

impl ReceiptIdGenerator for SequentialReceiptIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!(
            "{}{:0width$}",
            RECEIPT_ID_PREFIX,
            self.next,
            width = RECEIPT_SUFFIX_LEN
        )
    }
}

// =============================================================================
// Checkout Processor
// =============================================================================

/// Builds receipts from orders.
#[derive(Debug)]
pub struct CheckoutProcessor {
    ids: Box<dyn ReceiptIdGenerator>,
}

impl CheckoutProcessor {
    /// Uses the given id generator.
    pub fn new(ids: Box<dyn ReceiptIdGenerator>) -> Self {
        CheckoutProcessor { ids }
    }

    /// Freezes `order` into a receipt stamped with the current time.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when the order has no lines.
    pub fn checkout(&mut self, order: &Order) -> CoreResult<Receipt> {
        self.checkout_at(order, Utc::now())
    }

    /// Same as [`checkout`](Self::checkout) with an explicit timestamp.
    pub fn checkout_at(&mut self, order: &Order, now: DateTime<Utc>) -> CoreResult<Receipt> {
        if order.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(Receipt {
            id: self.ids.next_id(),
            date: now,
            customer: order.customer_or_default(),
            payment_method: order.payment_method,
            discount: order.discount,
            tax_rate: order.tax_rate,
            lines: order.lines.clone(),
            totals: totals::compute(&order.lines, order.tax_rate, order.discount),
        })
    }
}

impl Default for CheckoutProcessor {
    fn default() -> Self {
        CheckoutProcessor::new(Box::new(RandomReceiptIds))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
