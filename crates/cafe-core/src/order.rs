//! # Order Builder
//!
//! The in-progress cart: the only mutable state before checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Builder Operations                             │
//! │                                                                         │
//! │  Operator Action          Method                  Cart Change           │
//! │  ───────────────          ──────                  ───────────           │
//! │                                                                         │
//! │  Tap catalog item ──────► add_item() ───────────► qty += 1 or push      │
//! │                                                                         │
//! │  Tap + / - ─────────────► change_quantity() ────► qty = max(1, q + d)   │
//! │                                                                         │
//! │  Tap trash ─────────────► remove_line() ────────► line removed          │
//! │                                                                         │
//! │  Order completed ───────► clear() ──────────────► back to defaults      │
//! │                                                                         │
//! │  NOTE: quantities never reach 0 through change_quantity();              │
//! │        removal is always an explicit action.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::totals::{self, Totals};
use crate::types::{CatalogItem, Discount, LineItem, Order, PaymentMethod, TaxRate};

/// Owns the current [`Order`] and enforces its line invariants.
///
/// ## Invariants
/// - Lines are unique by catalog item id (adding again increases quantity)
/// - Every line has `qty >= 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBuilder {
    order: Order,
    /// Tax rate a fresh order starts with; the store's default setting.
    default_tax_rate: TaxRate,
}

impl OrderBuilder {
    /// Creates an empty cart whose orders start at `default_tax_rate`.
    pub fn new(default_tax_rate: TaxRate) -> Self {
        OrderBuilder {
            order: Order::new(default_tax_rate),
            default_tax_rate,
        }
    }

    /// Read access to the current order.
    #[inline]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Lines in display order.
    #[inline]
    pub fn lines(&self) -> &[LineItem] {
        &self.order.lines
    }

    /// Adds one unit of a catalog item.
    ///
    /// If a line for the same catalog item exists its quantity goes up by 1,
    /// otherwise a new line with quantity 1 is appended. The price is frozen
    /// from `item` only when the line is first created.
    pub fn add_item(&mut self, item: &CatalogItem) {
        match self.order.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => self.order.lines.push(LineItem::from_catalog(item)),
        }
    }

    /// Adjusts a line's quantity by `delta`, never below 1.
    ///
    /// Returns `false` when no line has `line_id`.
    pub fn change_quantity(&mut self, line_id: &str, delta: i64) -> bool {
        match self.order.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.qty = line.qty.saturating_add(delta).max(1);
                true
            }
            None => false,
        }
    }

    /// Removes a line regardless of its quantity.
    ///
    /// Returns `false` when no line has `line_id`.
    pub fn remove_line(&mut self, line_id: &str) -> bool {
        let before = self.order.lines.len();
        self.order.lines.retain(|l| l.id != line_id);
        self.order.lines.len() != before
    }

    /// Empties the cart and resets discount, customer, payment method and
    /// tax rate to their defaults.
    pub fn clear(&mut self) {
        self.order = Order::new(self.default_tax_rate);
    }

    /// True iff at least one line exists.
    #[inline]
    pub fn can_checkout(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn set_discount(&mut self, discount: Discount) {
        self.order.discount = discount;
    }

    pub fn set_tax_rate(&mut self, tax_rate: TaxRate) {
        self.order.tax_rate = tax_rate;
    }

    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.order.customer = customer.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.order.payment_method = method;
    }

    /// Changes the rate new orders start with. The current order keeps its
    /// own rate until the next [`clear`](Self::clear).
    pub fn set_default_tax_rate(&mut self, tax_rate: TaxRate) {
        self.default_tax_rate = tax_rate;
    }

    #[inline]
    pub fn default_tax_rate(&self) -> TaxRate {
        self.default_tax_rate
    }

    /// Live totals for the current order.
    pub fn totals(&self) -> Totals {
        totals::compute(&self.order.lines, self.order.tax_rate, self.order.discount)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.order.lines.iter().map(|l| l.qty).sum()
    }

}

impl Default for OrderBuilder {
    fn default() -> Self {
        OrderBuilder::new(TaxRate::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal_macros::dec;

    fn catalog_item(id: &str, sku: &str, cents: i64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            sku: sku.to_string(),
            name: format!("Item {}", id),
            category: "Coffee".to_string(),
            price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut builder = OrderBuilder::default();
        let espresso = catalog_item("m1", "CF-ESP", 350);

        builder.add_item(&espresso);
        builder.add_item(&espresso);

        assert_eq!(builder.lines().len(), 1);
        assert_eq!(builder.lines()[0].qty, 2);
        assert_eq!(builder.lines()[0].line_total(), Money::from_cents(700));
    }

    #[test]
    fn test_change_quantity_saturates() {
        let mut builder = OrderBuilder::default();
        builder.add_item(&catalog_item("m1", "CF-ESP", 350));

        assert!(builder.change_quantity("m1", i64::MAX));
        assert_eq!(builder.lines()[0].qty, i64::MAX);

        builder.add_item(&catalog_item("m1", "CF-ESP", 350));
        assert_eq!(builder.lines()[0].qty, i64::MAX);

        assert!(builder.change_quantity("m1", i64::MIN));
        assert_eq!(builder.lines()[0].qty, 1);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut builder = OrderBuilder::default();
        builder.add_item(&catalog_item("m2", "CF-LAT", 450));
        builder.add_item(&catalog_item("m1", "CF-ESP", 350));
        builder.add_item(&catalog_item("m2", "CF-LAT", 450));

        let ids: Vec<&str> = builder.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
        assert_eq!(builder.total_quantity(), 3);
    }

    #[test]
    fn test_price_is_frozen_at_first_add() {
        let mut builder = OrderBuilder::default();
        builder.add_item(&catalog_item("m1", "CF-ESP", 350));
        builder.add_item(&catalog_item("m1", "CF-ESP", 999));

        assert_eq!(builder.lines()[0].price, Money::from_cents(350));
    }

    #[test]
    fn test_change_quantity_never_drops_below_one() {
        let mut builder = OrderBuilder::default();
        builder.add_item(&catalog_item("m1", "CF-ESP", 350));

        assert!(builder.change_quantity("m1", 4));
        assert_eq!(builder.lines()[0].qty, 5);

        assert!(builder.change_quantity("m1", -10));
        assert_eq!(builder.lines()[0].qty, 1);

        assert!(!builder.change_quantity("missing", 1));
    }

    #[test]
    fn test_remove_line_ignores_quantity() {
        let mut builder = OrderBuilder::default();
        let espresso = catalog_item("m1", "CF-ESP", 350);
        for _ in 0..5 {
            builder.add_item(&espresso);
        }

        assert!(builder.remove_line("m1"));
        assert!(!builder.can_checkout());
        assert!(!builder.remove_line("m1"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut builder = OrderBuilder::new(TaxRate::standard());
        builder.add_item(&catalog_item("m1", "CF-ESP", 350));
        builder.set_discount(Discount::from_percent(dec!(15)));
        builder.set_customer("Asha");
        builder.set_payment_method(PaymentMethod::GiftCard);
        builder.set_tax_rate(TaxRate::zero());

        builder.clear();

        let order = builder.order();
        assert!(order.lines.is_empty());
        assert_eq!(order.discount, Discount::none());
        assert_eq!(order.customer, "");
        assert_eq!(order.payment_method, PaymentMethod::Cash);
        assert_eq!(order.tax_rate, TaxRate::standard());
    }

    #[test]
    fn test_default_tax_rate_applies_from_next_order() {
        let mut builder = OrderBuilder::default();
        builder.set_default_tax_rate(TaxRate::from_percent(dec!(5)));
        assert_eq!(builder.order().tax_rate, TaxRate::standard());

        builder.clear();
        assert_eq!(builder.order().tax_rate, TaxRate::from_percent(dec!(5)));
    }

    #[test]
    fn test_can_checkout_requires_a_line() {
        let mut builder = OrderBuilder::default();
        assert!(!builder.can_checkout());

        builder.add_item(&catalog_item("m1", "CF-ESP", 350));
        assert!(builder.can_checkout());
    }

    #[test]
    fn test_live_totals() {
        let mut builder = OrderBuilder::default();
        let espresso = catalog_item("m1", "CF-ESP", 350);
        builder.add_item(&espresso);
        builder.add_item(&espresso);
        builder.set_discount(Discount::from_percent(dec!(10)));

        assert_eq!(builder.totals().total.amount(), dec!(7.119));
    }
}
