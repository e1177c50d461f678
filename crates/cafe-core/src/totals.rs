//! # Totals Calculator
//!
//! Turns a set of lines, a discount and a tax rate into a totals breakdown.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal  = Σ price × qty                          7.00               │
//! │  discount  = subtotal × d / 100   (only if d > 0)  -0.70   (d = 10)    │
//! │  taxable   = max(0, subtotal - discount)            6.30               │
//! │  tax       = taxable × t                           +0.819  (t = 0.13)  │
//! │  ───────────────────────────────────────────────────────────           │
//! │  total     = taxable + tax                          7.119              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and infallible. Negative prices or quantities are kept out by the
//! order builder and the form validators, not re-checked here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Discount, LineItem, TaxRate};

/// Derived totals for an order or receipt.
///
/// ## Invariant
/// `total == subtotal - discount_amount + tax_amount`, and all four are ≥ 0
/// for well-formed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Totals {
    #[ts(as = "String")]
    pub subtotal: Money,
    #[ts(as = "String")]
    pub discount_amount: Money,
    #[ts(as = "String")]
    pub tax_amount: Money,
    #[ts(as = "String")]
    pub total: Money,
}

impl Totals {
    /// The amount tax was charged on.
    pub fn taxable(&self) -> Money {
        (self.subtotal - self.discount_amount).clamp_non_negative()
    }
}

/// Computes totals for `lines` at `tax_rate` with `discount` applied first.
///
/// ## Example
/// ```rust
/// use cafe_core::money::Money;
/// use cafe_core::totals::compute;
/// use cafe_core::types::{Discount, LineItem, TaxRate};
/// use rust_decimal::Decimal;
///
/// let lines = vec![LineItem {
///     id: "m-esp".into(),
///     sku: "CF-ESP".into(),
///     name: "Espresso".into(),
///     price: Money::from_cents(350),
///     qty: 2,
/// }];
/// let totals = compute(
///     &lines,
///     TaxRate::from_bps(1300),
///     Discount::from_percent(Decimal::from(10)),
/// );
/// assert_eq!(totals.total.amount(), Decimal::new(7119, 3));
/// ```
pub fn compute(lines: &[LineItem], tax_rate: TaxRate, discount: Discount) -> Totals {
    let subtotal: Money = lines.iter().map(LineItem::line_total).sum();

    let discount_amount = if discount.is_active() {
        subtotal.percentage(discount.percent())
    } else {
        Money::zero()
    };

    let taxable = (subtotal - discount_amount).clamp_non_negative();
    let tax_amount = taxable.calculate_tax(tax_rate);

    Totals {
        subtotal,
        discount_amount,
        tax_amount,
        total: taxable + tax_amount,
    }
}

/// [`compute`] with the house defaults: 13% tax, no discount.
pub fn compute_with_defaults(lines: &[LineItem]) -> Totals {
    compute(lines, TaxRate::default(), Discount::default())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn line(sku: &str, cents: i64, qty: i64) -> LineItem {
        LineItem {
            id: format!("m-{}", sku),
            sku: sku.to_string(),
            name: sku.to_string(),
            price: Money::from_cents(cents),
            qty,
        }
    }

    #[test]
    fn test_espresso_scenario() {
        let lines = vec![line("CF-ESP", 350, 2)];
        let totals = compute(
            &lines,
            TaxRate::from_fraction(dec!(0.13)),
            Discount::from_percent(dec!(10)),
        );

        assert_eq!(totals.subtotal.amount(), dec!(7.00));
        assert_eq!(totals.discount_amount.amount(), dec!(0.70));
        assert_eq!(totals.taxable().amount(), dec!(6.30));
        assert_eq!(totals.tax_amount.amount(), dec!(0.819));
        assert_eq!(totals.total.amount(), dec!(7.119));
    }

    #[test]
    fn test_defaults_are_thirteen_percent_and_no_discount() {
        let lines = vec![line("BK-CRS", 1000, 1)];
        let totals = compute_with_defaults(&lines);

        assert!(totals.discount_amount.is_zero());
        assert_eq!(totals.tax_amount.amount(), dec!(1.30));
        assert_eq!(totals.total.amount(), dec!(11.30));
    }

    #[test]
    fn test_empty_lines_are_all_zero() {
        let totals = compute(&[], TaxRate::standard(), Discount::from_percent(dec!(50)));
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_full_discount_leaves_nothing_to_tax() {
        let lines = vec![line("CF-LAT", 450, 3)];
        let totals = compute(&lines, TaxRate::standard(), Discount::from_percent(dec!(100)));

        assert_eq!(totals.discount_amount, totals.subtotal);
        assert!(totals.tax_amount.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_negative_discount_is_ignored() {
        let lines = vec![line("CF-LAT", 450, 1)];
        let totals = compute(&lines, TaxRate::zero(), Discount::from_percent(dec!(-20)));

        assert!(totals.discount_amount.is_zero());
        assert_eq!(totals.total.amount(), dec!(4.50));
    }

    fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec((0i64..100_000, 1i64..50), 0..12).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (cents, qty))| line(&format!("SKU-{}", i), cents, qty))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: total == max(0, subtotal - discount) × (1 + t), and every
        /// field is non-negative.
        #[test]
        fn total_matches_closed_form(
            lines in arb_lines(),
            tax_bps in 0u32..10_000,
            discount in 0i64..=100,
        ) {
            let rate = TaxRate::from_bps(tax_bps);
            let discount = Discount::from_percent(Decimal::from(discount));
            let totals = compute(&lines, rate, discount);

            let subtotal: Decimal = lines
                .iter()
                .map(|l| l.price.amount() * Decimal::from(l.qty))
                .sum();
            let expected = (subtotal - totals.discount_amount.amount()).max(Decimal::ZERO)
                * (Decimal::ONE + rate.fraction());

            prop_assert_eq!(totals.total.amount(), expected);
            prop_assert_eq!(
                totals.total,
                totals.subtotal - totals.discount_amount + totals.tax_amount
            );
            prop_assert!(!totals.subtotal.is_negative());
            prop_assert!(!totals.discount_amount.is_negative());
            prop_assert!(!totals.tax_amount.is_negative());
            prop_assert!(!totals.total.is_negative());
        }

        /// Property: no discount when d ≤ 0, no tax when t == 0.
        #[test]
        fn zero_inputs_produce_zero_components(
            lines in arb_lines(),
            discount in -100i64..=0,
        ) {
            let totals = compute(
                &lines,
                TaxRate::zero(),
                Discount::from_percent(Decimal::from(discount)),
            );
            prop_assert!(totals.discount_amount.is_zero());
            prop_assert!(totals.tax_amount.is_zero());
            prop_assert_eq!(totals.total, totals.subtotal);
        }
    }
}
