//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Guarded preconditions of the pipeline          │
//! │  └── ValidationError  - Form input rejected before it reaches the core │
//! │                                                                         │
//! │  register errors (apps/register)                                       │
//! │  └── ApiError         - What display surfaces see (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Display surface        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline itself has almost nothing that can fail: totals never fail,
//! oversell clamps, unknown SKUs are skipped. What remains are guarded
//! preconditions that short-circuit before any state changes.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Checkout was attempted with no lines in the cart.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart: (empty)
    ///      │
    ///      ▼
    /// complete_order()
    ///      │
    ///      ▼
    /// EmptyCart ── no receipt, stock and movements untouched
    /// ```
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A catalog item id was not found.
    #[error("Catalog item not found: {0}")]
    CatalogItemNotFound(String),

    /// A cart line id was not found.
    #[error("Line not found in cart: {0}")]
    LineNotFound(String),

    /// An inventory edit referenced a SKU with no stock record.
    #[error("Stock item not found: {0}")]
    StockItemNotFound(String),

    /// A receipt id was not found in the receipt history.
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`crate::validation`] functions, which the register layer
/// calls before handing values to the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., bad characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
