//! # Report Commands
//!
//! Expenses entry and the profit-and-loss summary.

use cafe_core::reports::{self, DateRange, SalesSummary};
use cafe_core::validation::{validate_amount, validate_item_name};
use cafe_core::{Expense, Money};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::PosState;

/// Records an operating expense dated now. Expenses are kept most recent
/// first.
pub fn add_expense(
    pos: &PosState,
    category: &str,
    description: &str,
    amount: Money,
) -> Result<Expense, ApiError> {
    debug!(category = %category, %amount, "add_expense command");
    validate_item_name(category)?;
    validate_amount("amount", amount)?;

    let expense = Expense {
        id: Uuid::new_v4().to_string(),
        date: Utc::now(),
        category: category.trim().to_string(),
        description: description.trim().to_string(),
        amount,
    };

    pos.with_session_mut(|s| s.expenses.insert(0, expense.clone()));

    info!(category = %expense.category, amount = %expense.amount, "Expense recorded");
    Ok(expense)
}

/// Expenses, most recent first.
pub fn list_expenses(pos: &PosState) -> Vec<Expense> {
    debug!("list_expenses command");
    pos.with_session(|s| s.expenses.clone())
}

/// Profit-and-loss over receipts dated within `[start, end]`; open ends are
/// unbounded. Expenses are totalled regardless of date.
pub fn sales_report(
    pos: &PosState,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<SalesSummary, ApiError> {
    debug!(?start, ?end, "sales_report command");

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(ApiError::validation("Report start must not be after its end"));
        }
    }

    Ok(pos.with_session(|s| {
        reports::summarize(
            s.transaction.receipts.receipts(),
            &s.expenses,
            DateRange { start, end },
        )
    }))
}
