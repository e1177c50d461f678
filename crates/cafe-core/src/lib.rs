//! # cafe-core: Pure Business Logic for Cafe POS
//!
//! The order → receipt → inventory transaction pipeline, as pure functions
//! and explicitly owned state. No I/O, no logging sinks, no globals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Display surfaces                             │   │
//! │  │    Catalog ──► Current Order ──► Checkout ──► Receipts / Stock  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/register                                │   │
//! │  │    state, config, commands, ApiError, tracing                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   order ──► totals ──► checkout ──► ledger                      │   │
//! │  │      └──────────── coordinator ─────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   catalog · stock · reports · money · types · validation        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`totals`] - Subtotal / discount / tax / total breakdown
//! - [`order`] - The mutable cart (`OrderBuilder`)
//! - [`checkout`] - Cart → immutable `Receipt`
//! - [`ledger`] - Receipt → stock depletion + Sale movements
//! - [`coordinator`] - The whole sequence over one `TransactionState`
//! - [`catalog`], [`stock`] - Reference data and the inventory master
//! - [`reports`] - Revenue / COGS / profit summary
//! - [`money`], [`types`] - Decimal money and domain records
//! - [`validation`], [`error`] - Form checks and typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::coordinator::{TransactionCoordinator, TransactionState};
//! use cafe_core::stock::StockBook;
//! use cafe_core::{CatalogItem, Money, StockItem, TaxRate};
//!
//! let espresso = CatalogItem {
//!     id: "m1".into(),
//!     sku: "CF-ESP".into(),
//!     name: "Espresso".into(),
//!     category: "Coffee".into(),
//!     price: Money::from_cents(350),
//! };
//! let stock = StockBook::new([StockItem {
//!     sku: "CF-ESP".into(),
//!     item: "Espresso Beans 1kg".into(),
//!     on_hand: 20,
//!     uom: "bag".into(),
//!     reorder: 5,
//!     cost: Money::from_cents(1200),
//!     supplier: "Bean Bros".into(),
//! }]);
//!
//! let mut state = TransactionState::new(TaxRate::standard(), stock);
//! let mut coordinator = TransactionCoordinator::default();
//!
//! state.order.add_item(&espresso);
//! state.order.add_item(&espresso);
//! let done = coordinator.complete_order(&mut state).unwrap();
//!
//! assert_eq!(done.receipt.customer, "Walk-in");
//! assert_eq!(state.stock.on_hand("CF-ESP"), Some(18));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod coordinator;
pub mod error;
pub mod ledger;
pub mod money;
pub mod order;
pub mod reports;
pub mod stock;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::Totals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Customer name printed when the operator leaves the field blank.
pub const DEFAULT_CUSTOMER: &str = "Walk-in";

/// First character of every receipt id.
pub const RECEIPT_ID_PREFIX: &str = "R";
