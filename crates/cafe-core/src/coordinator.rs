//! # Transaction Coordinator
//!
//! Runs checkout → receipt history → inventory ledger → cart reset as one
//! logical unit over an explicitly owned [`TransactionState`].
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  complete_order(&mut state)                                             │
//! │                                                                         │
//! │  1. order.can_checkout()? ── no ──► Err(EmptyCart), state untouched     │
//! │          │ yes                                                          │
//! │          ▼                                                              │
//! │  2. receipt = checkout(order)                                           │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. receipts.prepend(receipt)               (most recent first)         │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. ledger::apply(receipt, stock)                                       │
//! │     stock = updated_stock                                               │
//! │     movements.prepend(new_movements)        (most recent first)         │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  5. order.clear()                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing after step 2 can fail, so there is no rollback path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkout::{CheckoutProcessor, ReceiptIdGenerator};
use crate::error::{CoreError, CoreResult};
use crate::ledger::{self, MovementLog};
use crate::order::OrderBuilder;
use crate::stock::StockBook;
use crate::types::{Movement, Receipt, TaxRate};

// =============================================================================
// Receipt History
// =============================================================================

/// Completed receipts, most recent first. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptHistory {
    receipts: Vec<Receipt>,
}

impl ReceiptHistory {
    pub fn new() -> Self {
        ReceiptHistory::default()
    }

    #[inline]
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.id == id)
    }

    pub fn prepend(&mut self, receipt: Receipt) {
        self.receipts.insert(0, receipt);
    }
}

// =============================================================================
// Transaction State
// =============================================================================

/// Everything the pipeline mutates, owned in one place.
#[derive(Debug, Clone, Default)]
pub struct TransactionState {
    pub order: OrderBuilder,
    pub stock: StockBook,
    pub movements: MovementLog,
    pub receipts: ReceiptHistory,
}

impl TransactionState {
    /// Empty cart at `default_tax_rate`, seeded stock, empty histories.
    pub fn new(default_tax_rate: TaxRate, stock: StockBook) -> Self {
        TransactionState {
            order: OrderBuilder::new(default_tax_rate),
            stock,
            movements: MovementLog::new(),
            receipts: ReceiptHistory::new(),
        }
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Combined outcome of one completed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTransaction {
    pub receipt: Receipt,
    pub updated_stock: StockBook,
    pub new_movements: Vec<Movement>,
    /// Receipt SKUs with no stock record.
    pub unmatched_skus: Vec<String>,
}

/// Owns the checkout processor and sequences a completed order.
#[derive(Debug, Default)]
pub struct TransactionCoordinator {
    checkout: CheckoutProcessor,
}

impl TransactionCoordinator {
    pub fn new(checkout: CheckoutProcessor) -> Self {
        TransactionCoordinator { checkout }
    }

    /// Coordinator whose receipts take ids from `ids`.
    pub fn with_ids(ids: Box<dyn ReceiptIdGenerator>) -> Self {
        TransactionCoordinator::new(CheckoutProcessor::new(ids))
    }

    /// Completes the current order in `state`.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when the cart has no lines; `state` is left
    /// exactly as it was.
    pub fn complete_order(
        &mut self,
        state: &mut TransactionState,
    ) -> CoreResult<CompletedTransaction> {
        self.complete_order_at(state, Utc::now())
    }

    /// [`complete_order`](Self::complete_order) with an explicit timestamp
    /// for the receipt and its movements.
    pub fn complete_order_at(
        &mut self,
        state: &mut TransactionState,
        now: DateTime<Utc>,
    ) -> CoreResult<CompletedTransaction> {
        if !state.order.can_checkout() {
            return Err(CoreError::EmptyCart);
        }

        let receipt = self.checkout.checkout_at(state.order.order(), now)?;
        state.receipts.prepend(receipt.clone());

        let application = ledger::apply_at(&receipt, &state.stock, now);
        state.stock = application.updated_stock.clone();
        state.movements.prepend(&application.new_movements);

        state.order.clear();

        Ok(CompletedTransaction {
            receipt,
            updated_stock: application.updated_stock,
            new_movements: application.new_movements,
            unmatched_skus: application.unmatched_skus,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::SequentialReceiptIds;
    use crate::money::Money;
    use crate::types::{CatalogItem, Discount, MovementReason, PaymentMethod, StockItem};
    use rust_decimal_macros::dec;

    fn espresso() -> CatalogItem {
        CatalogItem {
            id: "m1".to_string(),
            sku: "CF-ESP".to_string(),
            name: "Espresso".to_string(),
            category: "Coffee".to_string(),
            price: Money::new(dec!(3.50)),
        }
    }

    fn state_with_stock(on_hand: i64) -> TransactionState {
        TransactionState::new(
            TaxRate::from_fraction(dec!(0.13)),
            StockBook::new([StockItem {
                sku: "CF-ESP".to_string(),
                item: "Espresso Beans 1kg".to_string(),
                on_hand,
                uom: "bag".to_string(),
                reorder: 5,
                cost: Money::new(dec!(12.0)),
                supplier: "Bean Bros".to_string(),
            }]),
        )
    }

    fn coordinator() -> TransactionCoordinator {
        TransactionCoordinator::with_ids(Box::new(SequentialReceiptIds::default()))
    }

    #[test]
    fn test_espresso_end_to_end() {
        let mut state = state_with_stock(20);
        let mut coordinator = coordinator();

        state.order.add_item(&espresso());
        state.order.add_item(&espresso());
        state.order.set_discount(Discount::from_percent(dec!(10)));

        let done = coordinator.complete_order(&mut state).unwrap();

        let totals = done.receipt.totals;
        assert_eq!(totals.subtotal.amount(), dec!(7.00));
        assert_eq!(totals.discount_amount.amount(), dec!(0.70));
        assert_eq!(totals.tax_amount.amount(), dec!(0.819));
        assert_eq!(totals.total.amount(), dec!(7.119));

        assert_eq!(state.stock.on_hand("CF-ESP"), Some(18));
        assert_eq!(done.updated_stock, state.stock);

        assert_eq!(done.new_movements.len(), 1);
        let movement = &state.movements.entries()[0];
        assert_eq!(movement.sku, "CF-ESP");
        assert_eq!(movement.qty, -2);
        assert_eq!(movement.reason, MovementReason::Sale);

        assert_eq!(state.receipts.len(), 1);
        assert_eq!(state.receipts.receipts()[0], done.receipt);
        assert!(!state.order.can_checkout());
    }

    #[test]
    fn test_empty_cart_changes_nothing() {
        let mut state = state_with_stock(20);
        let before_stock = state.stock.clone();
        let mut coordinator = coordinator();

        let result = coordinator.complete_order(&mut state);

        assert_eq!(result, Err(CoreError::EmptyCart));
        assert!(state.receipts.is_empty());
        assert!(state.movements.is_empty());
        assert_eq!(state.stock, before_stock);
    }

    #[test]
    fn test_oversell_scenario() {
        let mut state = state_with_stock(1);
        let mut coordinator = coordinator();
        state.order.add_item(&espresso());
        state.order.change_quantity("m1", 4);

        let done = coordinator.complete_order(&mut state).unwrap();

        assert_eq!(state.stock.on_hand("CF-ESP"), Some(0));
        assert_eq!(done.new_movements[0].qty, -5);
    }

    #[test]
    fn test_clear_after_checkout_resets_form_fields() {
        let mut state = state_with_stock(20);
        let mut coordinator = coordinator();
        state.order.add_item(&espresso());
        state.order.set_customer("Asha");
        state.order.set_payment_method(PaymentMethod::QrWallet);

        coordinator.complete_order(&mut state).unwrap();

        let order = state.order.order();
        assert_eq!(order.customer, "");
        assert_eq!(order.payment_method, PaymentMethod::Cash);
        assert_eq!(order.discount, Discount::none());
    }

    #[test]
    fn test_histories_are_most_recent_first() {
        let mut state = state_with_stock(20);
        let mut coordinator = coordinator();

        for _ in 0..3 {
            state.order.add_item(&espresso());
            coordinator.complete_order(&mut state).unwrap();
        }

        let ids: Vec<&str> = state.receipts.receipts().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R000003", "R000002", "R000001"]);
        assert_eq!(state.movements.len(), 3);
        assert_eq!(state.stock.on_hand("CF-ESP"), Some(17));
        assert!(state.receipts.get("R000002").is_some());
    }

    #[test]
    fn test_unmatched_sku_is_reported() {
        let mut state = TransactionState::default();
        let mut coordinator = coordinator();
        state.order.add_item(&espresso());

        let done = coordinator.complete_order(&mut state).unwrap();

        assert_eq!(done.unmatched_skus, vec!["CF-ESP".to_string()]);
        assert_eq!(state.movements.len(), 1);
    }
}
