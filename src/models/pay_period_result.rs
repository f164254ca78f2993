//! The result of one engine invocation for a single week.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weekly pay breakdown for one pay period.
///
/// All amounts are weekly. `benefit_reduction` is the amount actually taken
/// off the base benefit, so `benefit_weekly + benefit_reduction` always equals
/// the base benefit used for the calculation.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::PayPeriodResult;
/// use rust_decimal::Decimal;
///
/// let result = PayPeriodResult {
///     gross_weekly: Decimal::from(500),
///     paye_weekly: Decimal::from(60),
///     acc_weekly: Decimal::from(8),
///     student_loan_weekly: Decimal::ZERO,
///     retirement_weekly: Decimal::ZERO,
///     total_deductions: Decimal::from(68),
///     net_weekly: Decimal::from(432),
///     benefit_weekly: Decimal::from(163),
///     benefit_reduction: Decimal::from(238),
/// };
/// assert_eq!(result.take_home(), Decimal::from(595));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodResult {
    /// Gross weekly earnings, including any holiday loading.
    pub gross_weekly: Decimal,
    /// PAYE, annualized then divided back to a week.
    pub paye_weekly: Decimal,
    /// ACC earners' levy.
    pub acc_weekly: Decimal,
    /// Student loan repayment.
    pub student_loan_weekly: Decimal,
    /// KiwiSaver contribution.
    pub retirement_weekly: Decimal,
    /// Sum of the four deductions.
    pub total_deductions: Decimal,
    /// Gross less total deductions.
    pub net_weekly: Decimal,
    /// Benefit remaining after abatement.
    pub benefit_weekly: Decimal,
    /// Amount the benefit was reduced by.
    pub benefit_reduction: Decimal,
}

impl PayPeriodResult {
    /// Net pay plus the abated benefit: the money in hand for the week.
    pub fn take_home(&self) -> Decimal {
        self.net_weekly + self.benefit_weekly
    }
}
