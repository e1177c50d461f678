//! # Cart Commands
//!
//! Commands for the catalog panel and the current order.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Receipt  │                         │
//! │  │  Cart    │     │          │     │          │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │          complete_order                        │
//! │                   add_to_cart     (sale.rs)                             │
//! │                   change_cart_quantity                                  │
//! │                   remove_from_cart                                      │
//! │                   set_discount / set_tax_rate                           │
//! │                   set_customer / set_payment_method                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────► (back to empty)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cafe_core::catalog::ALL_CATEGORIES;
use cafe_core::order::OrderBuilder;
use cafe_core::validation::{
    validate_customer, validate_delta, validate_discount_percent, validate_search_query,
    validate_tax_percent,
};
use cafe_core::{CatalogItem, CoreError, Discount, LineItem, PaymentMethod, TaxRate, Totals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, PosState};

/// Catalog panel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Category tabs, led by "All".
    pub categories: Vec<String>,
    pub items: Vec<CatalogItem>,
}

/// Cart response including lines, order fields and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<LineItem>,
    pub discount: Discount,
    pub tax_rate: TaxRate,
    pub customer: String,
    pub payment_method: PaymentMethod,
    pub totals: Totals,
    pub total_quantity: i64,
    pub can_checkout: bool,
}

impl From<&OrderBuilder> for CartResponse {
    fn from(builder: &OrderBuilder) -> Self {
        let order = builder.order();
        CartResponse {
            lines: order.lines.clone(),
            discount: order.discount,
            tax_rate: order.tax_rate,
            customer: order.customer.clone(),
            payment_method: order.payment_method,
            totals: builder.totals(),
            total_quantity: builder.total_quantity(),
            can_checkout: builder.can_checkout(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Gets the full menu with its category tabs.
pub fn get_catalog(catalog: &CatalogState) -> CatalogResponse {
    debug!("get_catalog command");
    let catalog = catalog.catalog();
    CatalogResponse {
        categories: catalog.categories(),
        items: catalog.items().to_vec(),
    }
}

/// Filters the menu by name/SKU and category ("All" or `None` for every
/// category).
pub fn search_catalog(
    catalog: &CatalogState,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<CatalogItem>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(
        query = %query,
        category = category.unwrap_or(ALL_CATEGORIES),
        "search_catalog command"
    );

    Ok(catalog
        .catalog()
        .search(&query, category)
        .into_iter()
        .cloned()
        .collect())
}

// =============================================================================
// Cart
// =============================================================================

/// Gets the current cart contents and totals.
pub fn get_cart(pos: &PosState) -> CartResponse {
    debug!("get_cart command");
    pos.with_session(|s| CartResponse::from(&s.transaction.order))
}

/// Adds one of a catalog item to the cart.
///
/// ## Behavior
/// - Item already in cart: its line quantity increases by one
/// - Otherwise: appended as a new line with the catalog price frozen in
pub fn add_to_cart(
    catalog: &CatalogState,
    pos: &PosState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = catalog
        .catalog()
        .get(item_id)
        .ok_or_else(|| CoreError::CatalogItemNotFound(item_id.to_string()))?;

    Ok(pos.with_session_mut(|s| {
        s.transaction.order.add_item(item);
        CartResponse::from(&s.transaction.order)
    }))
}

/// Changes a line's quantity by a non-zero `delta`, never below 1. Use
/// [`remove_from_cart`] to drop a line.
pub fn change_cart_quantity(
    pos: &PosState,
    line_id: &str,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, delta, "change_cart_quantity command");
    validate_delta(delta)?;

    pos.with_session_mut(|s| {
        if !s.transaction.order.change_quantity(line_id, delta) {
            return Err(CoreError::LineNotFound(line_id.to_string()).into());
        }
        Ok(CartResponse::from(&s.transaction.order))
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(pos: &PosState, line_id: &str) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, "remove_from_cart command");

    pos.with_session_mut(|s| {
        if !s.transaction.order.remove_line(line_id) {
            return Err(CoreError::LineNotFound(line_id.to_string()).into());
        }
        Ok(CartResponse::from(&s.transaction.order))
    })
}

/// Empties the cart and resets every order field, tax back to the default.
pub fn clear_cart(pos: &PosState) -> CartResponse {
    debug!("clear_cart command");
    pos.with_session_mut(|s| {
        s.transaction.order.clear();
        CartResponse::from(&s.transaction.order)
    })
}

// =============================================================================
// Order Fields
// =============================================================================

/// Payment methods in the order the checkout panel lists them.
pub fn list_payment_methods() -> Vec<PaymentMethod> {
    PaymentMethod::ALL.to_vec()
}

/// Sets the order discount as a percentage, `0..=100`.
pub fn set_discount(pos: &PosState, percent: Decimal) -> Result<CartResponse, ApiError> {
    debug!(%percent, "set_discount command");
    validate_discount_percent(percent)?;

    Ok(pos.with_session_mut(|s| {
        s.transaction.order.set_discount(Discount::from_percent(percent));
        CartResponse::from(&s.transaction.order)
    }))
}

/// Sets this order's tax rate as a percentage, `0 ≤ percent < 100`.
pub fn set_tax_rate(pos: &PosState, percent: Decimal) -> Result<CartResponse, ApiError> {
    debug!(%percent, "set_tax_rate command");
    validate_tax_percent(percent)?;

    Ok(pos.with_session_mut(|s| {
        s.transaction.order.set_tax_rate(TaxRate::from_percent(percent));
        CartResponse::from(&s.transaction.order)
    }))
}

/// Sets the customer name. Blank prints as "Walk-in".
pub fn set_customer(pos: &PosState, customer: &str) -> Result<CartResponse, ApiError> {
    debug!(customer = %customer, "set_customer command");
    validate_customer(customer)?;

    Ok(pos.with_session_mut(|s| {
        s.transaction.order.set_customer(customer);
        CartResponse::from(&s.transaction.order)
    }))
}

/// Sets the payment method from its label ("Cash", "Card", "QR / Wallet",
/// "Gift Card").
pub fn set_payment_method(pos: &PosState, method: &str) -> Result<CartResponse, ApiError> {
    debug!(method = %method, "set_payment_method command");
    let method: PaymentMethod = method.parse()?;

    Ok(pos.with_session_mut(|s| {
        s.transaction.order.set_payment_method(method);
        CartResponse::from(&s.transaction.order)
    }))
}
