//! Student loan repayment calculation.

use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::EngineResult;

use super::validation::ensure_non_negative;

/// Computes the weekly student loan repayment.
///
/// Repayments are only due when `has_student_loan` is set, and only on the
/// part of the weekly gross above the repayment threshold.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_student_loan;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// // (600 - 465) x 12%
/// let repayment = compute_student_loan(Decimal::from(600), true, &config).unwrap();
/// assert_eq!(repayment, Decimal::from_str("16.2").unwrap());
/// ```
pub fn compute_student_loan(
    weekly_gross: Decimal,
    has_student_loan: bool,
    config: &JurisdictionConfig,
) -> EngineResult<Decimal> {
    ensure_non_negative("weekly_gross", weekly_gross)?;

    let loan = config.student_loan();
    if !has_student_loan || weekly_gross <= loan.weekly_threshold {
        return Ok(Decimal::ZERO);
    }

    Ok((weekly_gross - loan.weekly_threshold) * loan.rate)
}
