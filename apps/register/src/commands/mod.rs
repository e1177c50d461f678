//! # Register Commands Module
//!
//! One function per operator action on the display surfaces.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── cart.rs       ◄─── Catalog panel, current order
//! ├── sale.rs       ◄─── Checkout, receipts, orders
//! ├── inventory.rs  ◄─── Inventory editor
//! ├── stock.rs      ◄─── Stock movement log
//! ├── report.rs     ◄─── Expenses, profit-and-loss
//! └── config.rs     ◄─── Settings
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn get_cart(pos: &PosState)
//!
//! // Needs the menu and the session
//! fn add_to_cart(catalog: &CatalogState, pos: &PosState, item_id: &str)
//!
//! // Settings plus the session (the cart carries the default tax)
//! fn set_default_tax(settings: &SettingsState, pos: &PosState, percent: Decimal)
//! ```
//!
//! Every fallible command returns `Result<T, ApiError>`; responses and
//! errors serialize with serde for the display layer.

pub mod cart;
pub mod config;
pub mod inventory;
pub mod report;
pub mod sale;
pub mod stock;
