//! # Validation Module
//!
//! Input validation for values typed into the register's forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Display surface                                              │
//! │  ├── Input widgets (min/max on number fields)                          │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Register command                                             │
//! │  └── THIS MODULE: clamp-free checks before values reach the core       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: cafe-core pipeline                                           │
//! │  └── Trusts its inputs; never re-validates                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::{validate_discount_percent, validate_sku};
//! use rust_decimal::Decimal;
//!
//! assert!(validate_sku("CF-ESP").is_ok());
//! assert!(validate_discount_percent(Decimal::from(150)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::StockItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SKU_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_CUSTOMER_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, hyphens and underscores only
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock or catalog item name: required, at most 200 characters.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer name. Blank is fine (it becomes "Walk-in").
pub fn validate_customer(customer: &str) -> ValidationResult<()> {
    if customer.trim().len() > MAX_CUSTOMER_LEN {
        return Err(ValidationError::TooLong {
            field: "customer".to_string(),
            max: MAX_CUSTOMER_LEN,
        });
    }

    Ok(())
}

/// Validates a search query and returns it trimmed.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order discount: `0 ≤ percent ≤ 100`.
pub fn validate_discount_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate entered as a percentage: `0 ≤ percent < 100`.
///
/// ```rust
/// use cafe_core::validation::validate_tax_percent;
/// use rust_decimal::Decimal;
///
/// assert!(validate_tax_percent(Decimal::from(13)).is_ok());
/// assert!(validate_tax_percent(Decimal::from(100)).is_err());
/// ```
pub fn validate_tax_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: "0".to_string(),
            max: "99.99".to_string(),
        });
    }

    Ok(())
}

/// Validates a money amount: must not be negative. Zero is allowed.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a count such as on-hand or a reorder point: must not be negative.
pub fn validate_count(field: &str, count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Largest single quantity change accepted from an operator.
pub const MAX_QUANTITY_DELTA: i64 = 1_000_000;

/// Validates a quantity adjustment: non-zero, at most
/// [`MAX_QUANTITY_DELTA`] in either direction.
pub fn validate_delta(delta: i64) -> ValidationResult<()> {
    if delta == 0 {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if !(-MAX_QUANTITY_DELTA..=MAX_QUANTITY_DELTA).contains(&delta) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: (-MAX_QUANTITY_DELTA).to_string(),
            max: MAX_QUANTITY_DELTA.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an inventory editor record before it is upserted.
pub fn validate_stock_item(item: &StockItem) -> ValidationResult<()> {
    validate_sku(&item.sku)?;
    validate_item_name(&item.item)?;
    validate_count("on hand", item.on_hand)?;
    validate_count("reorder point", item.reorder)?;
    validate_amount("unit cost", item.cost)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("CF-ESP").is_ok());
        assert!(validate_sku("MILK_1L").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Espresso Beans 1kg").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_customer() {
        assert!(validate_customer("").is_ok());
        assert!(validate_customer("Asha").is_ok());
        assert!(validate_customer(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(dec!(0)).is_ok());
        assert!(validate_discount_percent(dec!(12.5)).is_ok());
        assert!(validate_discount_percent(dec!(100)).is_ok());
        assert!(validate_discount_percent(dec!(-1)).is_err());
        assert!(validate_discount_percent(dec!(100.01)).is_err());
    }

    #[test]
    fn test_validate_tax_percent() {
        assert!(validate_tax_percent(dec!(0)).is_ok());
        assert!(validate_tax_percent(dec!(13)).is_ok());
        assert!(validate_tax_percent(dec!(99.99)).is_ok());
        assert!(validate_tax_percent(dec!(100)).is_err());
        assert!(validate_tax_percent(dec!(-0.5)).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_amount("price", Money::zero()).is_ok());
        assert!(validate_amount("price", Money::from_cents(-1)).is_err());
        assert!(validate_count("on hand", 0).is_ok());
        assert!(validate_count("on hand", -3).is_err());
        assert!(validate_delta(-2).is_ok());
        assert!(validate_delta(0).is_err());
    }

    #[test]
    fn test_validate_delta_bounds() {
        assert!(validate_delta(MAX_QUANTITY_DELTA).is_ok());
        assert!(validate_delta(-MAX_QUANTITY_DELTA).is_ok());
        assert!(matches!(
            validate_delta(i64::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_delta(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_stock_item() {
        let mut item = StockItem {
            sku: "CF-ESP".to_string(),
            item: "Espresso Beans 1kg".to_string(),
            on_hand: 20,
            uom: "bag".to_string(),
            reorder: 5,
            cost: Money::from_cents(1200),
            supplier: "Bean Bros".to_string(),
        };
        assert!(validate_stock_item(&item).is_ok());

        item.reorder = -1;
        assert_eq!(
            validate_stock_item(&item),
            Err(ValidationError::Negative {
                field: "reorder point".to_string()
            })
        );
    }
}
