//! Monday-to-Sunday week views over ledger transactions.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionKind};

/// Returns the Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use nz_pay_engine::ledger::week_start;
/// use chrono::NaiveDate;
///
/// let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The transactions of one week, newest first, with the week's totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekView {
    /// Monday of the week.
    pub start: NaiveDate,
    /// Sunday of the week.
    pub end: NaiveDate,
    /// Transactions dated within the week, newest first.
    pub transactions: Vec<Transaction>,
    /// Sum of income in the week.
    pub income: Decimal,
    /// Sum of expenses in the week.
    pub expense: Decimal,
}

impl WeekView {
    /// Builds the view for the week containing `date`.
    pub(crate) fn for_date(date: NaiveDate, all: &[Transaction]) -> Self {
        let start = week_start(date);
        let end = start + Duration::days(6);

        let mut transactions: Vec<Transaction> = all
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let sum_of = |kind: TransactionKind| -> Decimal {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let income = sum_of(TransactionKind::Income);
        let expense = sum_of(TransactionKind::Expense);

        Self {
            start,
            end,
            transactions,
            income,
            expense,
        }
    }

    /// Income less expenses for the week.
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    /// Returns `true` if no transactions fall in the week.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The view for the following (or, with a negative offset, preceding) week.
    pub fn shifted(&self, weeks: i64, all: &[Transaction]) -> Self {
        Self::for_date(self.start + Duration::days(weeks * 7), all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_for_each_weekday() {
        let monday = date(2026, 3, 2);
        for offset in 0..7 {
            assert_eq!(week_start(monday + Duration::days(offset)), monday);
        }
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // Sunday 1 March 2026 belongs to the week starting Monday 23 February.
        assert_eq!(week_start(date(2026, 3, 1)), date(2026, 2, 23));
    }

    #[test]
    fn test_view_bounds_are_monday_to_sunday() {
        let view = WeekView::for_date(date(2026, 3, 4), &[]);
        assert_eq!(view.start, date(2026, 3, 2));
        assert_eq!(view.end, date(2026, 3, 8));
        assert!(view.is_empty());
        assert_eq!(view.net(), Decimal::ZERO);
    }
}
