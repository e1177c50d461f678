//! # Domain Types
//!
//! Core domain types used throughout Cafe POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │──►│    LineItem     │──►│    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, sku        │   │  frozen price   │   │  frozen lines   │       │
//! │  │  category       │   │  qty ≥ 1        │   │  frozen totals  │       │
//! │  │  price          │   └─────────────────┘   └────────┬────────┘       │
//! │  └─────────────────┘                                  │                │
//! │                                                       ▼                │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   StockItem     │◄──│    Movement     │       │
//! │  │  0.13 = 13%     │   │  sku (key)      │   │  signed qty     │       │
//! │  ├─────────────────┤   │  on_hand ≥ 0    │   │  reason         │       │
//! │  │    Discount     │   │  reorder point  │   └─────────────────┘       │
//! │  │  10 = 10% off   │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` copies the catalog item's sku, name and price when it is
//! added. A `Receipt` copies the lines and totals when it is created. Later
//! catalog edits never rewrite history.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::totals::Totals;
use crate::DEFAULT_CUSTOMER;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a fraction of the taxable amount.
///
/// `0.13` means 13%. Valid rates lie in `[0, 1)`; the form layer enforces that
/// through [`crate::validation::validate_tax_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a tax rate from a fraction (`0.13`).
    #[inline]
    pub const fn from_fraction(fraction: Decimal) -> Self {
        TaxRate(fraction)
    }

    /// Creates a tax rate from a percentage (`13` → `0.13`).
    ///
    /// The tax field on the order screen is entered as a percentage.
    pub fn from_percent(percent: Decimal) -> Self {
        TaxRate(percent / Decimal::ONE_HUNDRED)
    }

    /// Creates a tax rate from basis points (`1300` → `0.13`).
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 4))
    }

    /// The house rate applied when nothing else is configured: 13%.
    pub fn standard() -> Self {
        TaxRate(Decimal::new(13, 2))
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (for display).
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::standard()
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Order-level discount as a percentage of the subtotal.
///
/// `10` means 10% off. Only strictly positive values discount anything;
/// zero and negative values behave as "no discount".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount(Decimal);

impl Discount {
    /// Creates a discount from a percentage.
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        Discount(percent)
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        Discount(Decimal::ZERO)
    }

    /// Returns the percentage.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// True when the discount reduces the subtotal.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::none()
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid. Recorded on the receipt; no gateway is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Physical cash payment.
    #[default]
    Cash,
    /// Card on an external terminal.
    Card,
    /// QR code or mobile wallet.
    #[serde(rename = "QR / Wallet")]
    QrWallet,
    /// Store gift card.
    #[serde(rename = "Gift Card")]
    GiftCard,
}

impl PaymentMethod {
    /// All methods, in the order the checkout panel lists them.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::QrWallet,
        PaymentMethod::GiftCard,
    ];

    /// Label shown on screen and printed on receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::QrWallet => "QR / Wallet",
            PaymentMethod::GiftCard => "Gift Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a payment method from its label, case-insensitively.
///
/// A few common spellings are accepted as well ("qr", "wallet", "gift").
impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" | "credit" | "debit" => Ok(PaymentMethod::Card),
            "qr / wallet" | "qr/wallet" | "qr" | "wallet" => Ok(PaymentMethod::QrWallet),
            "gift card" | "giftcard" | "gift" => Ok(PaymentMethod::GiftCard),
            _ => Err(ValidationError::InvalidFormat {
                field: "payment method".to_string(),
                reason: format!("unknown payment method '{}'", s.trim()),
            }),
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A menu item available for sale. Reference data, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Identity used to merge repeated adds into one line.
    pub id: String,

    /// Stock Keeping Unit; links sales to inventory.
    pub sku: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Menu category ("Coffee", "Bakery", ...).
    pub category: String,

    /// Unit price.
    #[ts(as = "String")]
    pub price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog item plus a quantity, in a cart or frozen in a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Catalog item id (the line's identity within an order).
    pub id: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    #[ts(as = "String")]
    pub price: Money,

    /// Quantity, always at least 1 while in a cart.
    pub qty: i64,
}

impl LineItem {
    /// Snapshots a catalog item with quantity 1.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        LineItem {
            id: item.id.clone(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            price: item.price,
            qty: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty)
    }
}

// =============================================================================
// Order
// =============================================================================

/// The in-progress cart. Owned by [`crate::order::OrderBuilder`] until checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Lines in the order they were first added.
    pub lines: Vec<LineItem>,

    /// Order-level discount percentage.
    #[ts(as = "String")]
    pub discount: Discount,

    /// Tax rate for this order.
    #[ts(as = "String")]
    pub tax_rate: TaxRate,

    /// Customer name as typed; may be blank.
    pub customer: String,

    /// How the customer pays.
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Creates an empty order with the given tax rate.
    pub fn new(tax_rate: TaxRate) -> Self {
        Order {
            lines: Vec::new(),
            discount: Discount::none(),
            tax_rate,
            customer: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Checks if the order has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Customer name to print, falling back to "Walk-in" when blank.
    pub fn customer_or_default(&self) -> String {
        let trimmed = self.customer.trim();
        if trimmed.is_empty() {
            DEFAULT_CUSTOMER.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new(TaxRate::default())
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Immutable record of a completed transaction.
///
/// Fields are public for reading; nothing in the crate mutates a receipt
/// after [`crate::checkout::CheckoutProcessor`] builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Session-unique id such as `R7K2QZM`.
    pub id: String,

    /// When the order was completed (ISO 8601 on the wire).
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Customer name, never blank.
    pub customer: String,

    pub payment_method: PaymentMethod,

    #[ts(as = "String")]
    pub discount: Discount,

    #[ts(as = "String")]
    pub tax_rate: TaxRate,

    /// Frozen copy of the cart lines.
    pub lines: Vec<LineItem>,

    /// Frozen totals.
    pub totals: Totals,
}

impl Receipt {
    /// Total units sold on this receipt.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Comma-separated item names, as the orders list shows them.
    pub fn item_summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Stock Item
// =============================================================================

/// An inventory record keyed by SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockItem {
    /// Unique key; matched against receipt line SKUs.
    pub sku: String,

    /// Item name ("Espresso Beans 1kg").
    pub item: String,

    /// Quantity on hand, never below zero.
    pub on_hand: i64,

    /// Unit of measure ("bag", "pcs", "L").
    pub uom: String,

    /// Reorder point; at or below it the item is flagged.
    pub reorder: i64,

    /// Unit cost.
    #[ts(as = "String")]
    pub cost: Money,

    pub supplier: String,
}

impl StockItem {
    /// True when on-hand has fallen to the reorder point.
    #[inline]
    pub fn needs_reorder(&self) -> bool {
        self.on_hand <= self.reorder
    }

    /// Applies a signed delta, clamping at zero. Returns the new on-hand.
    ///
    /// Saturates at `i64::MAX` instead of wrapping.
    pub fn apply_delta(&mut self, delta: i64) -> i64 {
        self.on_hand = self.on_hand.saturating_add(delta).max(0);
        self.on_hand
    }
}

// =============================================================================
// Movement
// =============================================================================

/// Why stock moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MovementReason {
    /// Depletion caused by a completed receipt.
    Sale,
    /// Goods received from a supplier.
    Purchase,
    #[serde(rename = "Waste/Spoilage")]
    WasteSpoilage,
    #[serde(rename = "Stocktake Adjustment")]
    StocktakeAdjustment,
}

impl MovementReason {
    pub const fn label(&self) -> &'static str {
        match self {
            MovementReason::Sale => "Sale",
            MovementReason::Purchase => "Purchase",
            MovementReason::WasteSpoilage => "Waste/Spoilage",
            MovementReason::StocktakeAdjustment => "Stocktake Adjustment",
        }
    }
}

impl fmt::Display for MovementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MovementReason {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale" => Ok(MovementReason::Sale),
            "purchase" => Ok(MovementReason::Purchase),
            "waste/spoilage" | "waste" | "spoilage" => Ok(MovementReason::WasteSpoilage),
            "stocktake adjustment" | "stocktake" | "adjustment" => {
                Ok(MovementReason::StocktakeAdjustment)
            }
            _ => Err(ValidationError::InvalidFormat {
                field: "reason".to_string(),
                reason: format!("unknown movement reason '{}'", s.trim()),
            }),
        }
    }
}

/// One signed quantity change in the stock ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Movement {
    pub id: String,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    pub sku: String,

    /// Item name at the time of the movement.
    pub item: String,

    /// Signed quantity: negative for depletion.
    pub qty: i64,

    pub reason: MovementReason,
}

// =============================================================================
// Expense
// =============================================================================

/// An operating expense entered on the reports screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Expense {
    pub id: String,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// "Rent", "Utilities", "Wages", ...
    pub category: String,

    pub description: String,

    #[ts(as = "String")]
    pub amount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_conversions() {
        assert_eq!(TaxRate::from_percent(dec!(13)), TaxRate::standard());
        assert_eq!(TaxRate::from_bps(1300), TaxRate::standard());
        assert_eq!(TaxRate::standard().percent(), dec!(13));
        assert!(TaxRate::zero().is_zero());
        assert_eq!(TaxRate::default(), TaxRate::standard());
    }

    #[test]
    fn test_discount_activity() {
        assert!(!Discount::none().is_active());
        assert!(!Discount::from_percent(dec!(-5)).is_active());
        assert!(Discount::from_percent(dec!(10)).is_active());
    }

    #[test]
    fn test_payment_method_labels_round_trip_through_from_str() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>(), Ok(method));
        }
        assert_eq!("debit".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_serializes_with_label() {
        let json = serde_json::to_string(&PaymentMethod::QrWallet).unwrap();
        assert_eq!(json, "\"QR / Wallet\"");
    }

    #[test]
    fn test_movement_reason_parsing() {
        assert_eq!(
            "Waste/Spoilage".parse::<MovementReason>(),
            Ok(MovementReason::WasteSpoilage)
        );
        assert_eq!(
            serde_json::to_string(&MovementReason::StocktakeAdjustment).unwrap(),
            "\"Stocktake Adjustment\""
        );
    }

    #[test]
    fn test_customer_fallback() {
        let mut order = Order::default();
        assert_eq!(order.customer_or_default(), "Walk-in");

        order.customer = "   ".to_string();
        assert_eq!(order.customer_or_default(), "Walk-in");

        order.customer = "  Asha ".to_string();
        assert_eq!(order.customer_or_default(), "Asha");
    }

    #[test]
    fn test_stock_item_clamps_and_flags() {
        let mut item = StockItem {
            sku: "MILK-1L".to_string(),
            item: "Whole Milk 1L".to_string(),
            on_hand: 3,
            uom: "L".to_string(),
            reorder: 2,
            cost: Money::from_cents(120),
            supplier: "Valley Dairy".to_string(),
        };
        assert!(!item.needs_reorder());

        assert_eq!(item.apply_delta(-1), 2);
        assert!(item.needs_reorder());

        assert_eq!(item.apply_delta(-10), 0);

        item.on_hand = 5;
        assert_eq!(item.apply_delta(i64::MAX), i64::MAX);
        assert_eq!(item.apply_delta(i64::MIN), 0);
    }
}
