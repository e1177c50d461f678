//! # Sales Reports
//!
//! Profit-and-loss summary over the receipt history.
//!
//! ```text
//! revenue            Σ receipt.total
//! − COGS             Σ receipt.subtotal × 35%
//! = gross profit
//! − operating exp.   Σ expense.amount
//! = net profit
//! ```
//!
//! COGS is an estimate: a fixed share of the pre-tax subtotal, not a costing
//! of the stock actually consumed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Expense, Receipt};

/// Estimated cost of goods as a percentage of the pre-tax subtotal.
pub fn cogs_percent() -> Decimal {
    Decimal::from(35)
}

/// Inclusive date window; open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Unbounded on both ends.
    pub fn all() -> Self {
        DateRange::default()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| at >= s) && self.end.map_or(true, |e| at <= e)
    }
}

/// One point of the sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesPoint {
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    /// Receipt total.
    #[ts(as = "String")]
    pub sales: Money,
    /// Receipt subtotal before discount and tax.
    #[ts(as = "String")]
    pub pretax: Money,
}

/// Summary for the reports screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesSummary {
    pub receipt_count: usize,
    #[ts(as = "String")]
    pub revenue: Money,
    #[ts(as = "String")]
    pub cogs: Money,
    #[ts(as = "String")]
    pub gross_profit: Money,
    #[ts(as = "String")]
    pub operating_expenses: Money,
    #[ts(as = "String")]
    pub net_profit: Money,
    /// Chart points in history order (most recent first).
    pub points: Vec<SalesPoint>,
}

/// Summarizes receipts in `range` against all recorded expenses.
///
/// Expenses are not date-filtered; the screen totals every expense entered.
pub fn summarize(receipts: &[Receipt], expenses: &[Expense], range: DateRange) -> SalesSummary {
    let in_range: Vec<&Receipt> = receipts.iter().filter(|r| range.contains(r.date)).collect();

    let revenue: Money = in_range.iter().map(|r| r.totals.total).sum();
    let cogs: Money = in_range
        .iter()
        .map(|r| r.totals.subtotal.percentage(cogs_percent()))
        .sum();
    let gross_profit = revenue - cogs;
    let operating_expenses: Money = expenses.iter().map(|e| e.amount).sum();

    SalesSummary {
        receipt_count: in_range.len(),
        revenue,
        cogs,
        gross_profit,
        operating_expenses,
        net_profit: gross_profit - operating_expenses,
        points: in_range
            .iter()
            .map(|r| SalesPoint {
                date: r.date,
                sales: r.totals.total,
                pretax: r.totals.subtotal,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals;
    use crate::types::{Discount, LineItem, PaymentMethod, TaxRate};
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn receipt_on(day: u32, cents: i64) -> Receipt {
        let lines = vec![LineItem {
            id: "m1".to_string(),
            sku: "CF-ESP".to_string(),
            name: "Espresso".to_string(),
            price: Money::from_cents(cents),
            qty: 1,
        }];
        Receipt {
            id: format!("R{:06}", day),
            date: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
            customer: "Walk-in".to_string(),
            payment_method: PaymentMethod::Cash,
            discount: Discount::none(),
            tax_rate: TaxRate::zero(),
            totals: totals::compute(&lines, TaxRate::zero(), Discount::none()),
            lines,
        }
    }

    fn expense(cents: i64) -> Expense {
        Expense {
            id: "e1".to_string(),
            date: Utc::now(),
            category: "Rent".to_string(),
            description: "March".to_string(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_profit_and_loss() {
        let receipts = vec![receipt_on(2, 10_000), receipt_on(1, 10_000)];
        let summary = summarize(&receipts, &[expense(5_000)], DateRange::all());

        assert_eq!(summary.receipt_count, 2);
        assert_eq!(summary.revenue.amount(), dec!(200));
        assert_eq!(summary.cogs.amount(), dec!(70));
        assert_eq!(summary.gross_profit.amount(), dec!(130));
        assert_eq!(summary.operating_expenses.amount(), dec!(50));
        assert_eq!(summary.net_profit.amount(), dec!(80));
        assert_eq!(summary.points.len(), 2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let receipts = vec![receipt_on(3, 100), receipt_on(2, 200), receipt_on(1, 400)];
        let start = receipts[1].date;
        let range = DateRange {
            start: Some(start),
            end: Some(start + Duration::days(1)),
        };

        let summary = summarize(&receipts, &[], range);

        assert_eq!(summary.receipt_count, 2);
        assert_eq!(summary.revenue, Money::from_cents(300));
    }

    #[test]
    fn test_net_profit_can_go_negative() {
        let summary = summarize(&[], &[expense(1_000)], DateRange::all());
        assert!(summary.net_profit.is_negative());
        assert_eq!(summary.receipt_count, 0);
    }
}
