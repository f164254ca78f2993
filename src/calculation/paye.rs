//! PAYE income tax calculation.
//!
//! This module applies the progressive bracket table to annual income and
//! converts between annual and weekly tax.

use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::EngineResult;

use super::validation::{checked_mul, ensure_non_negative};

/// Number of pay weeks in a tax year.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Computes annual PAYE on an annual gross income.
///
/// The brackets are walked in ascending order as a marginal-rate accumulator.
/// Each bracket taxes the slice of income between its lower bound (the
/// previous bracket's upper bound) and its own upper bound. The walk stops
/// once no income remains.
///
/// # Arguments
///
/// * `annual_gross` - Annual gross income, must not be negative
/// * `config` - The jurisdiction configuration holding the bracket table
///
/// # Returns
///
/// Returns the annual tax, or `ValidationError` for a negative income.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_paye;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// let tax = compute_paye(Decimal::from(20_000), &config).unwrap();
/// // 15600 x 10.5% + 4400 x 17.5%
/// assert_eq!(tax, Decimal::from(2408));
/// ```
pub fn compute_paye(annual_gross: Decimal, config: &JurisdictionConfig) -> EngineResult<Decimal> {
    ensure_non_negative("annual_gross", annual_gross)?;

    let mut tax = Decimal::ZERO;
    let mut remaining = annual_gross;
    let mut previous_bound = Decimal::ZERO;

    for bracket in config.tax_brackets().brackets() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match bracket.upper_bound {
            Some(bound) => remaining.min(bound - previous_bound),
            None => remaining,
        };
        tax += taxable * bracket.rate;
        remaining -= taxable;

        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound;
        }
    }

    Ok(tax)
}

/// Computes weekly PAYE by annualizing the weekly gross, taxing the annual
/// figure, and dividing back by [`WEEKS_PER_YEAR`].
///
/// This assumes the same weekly gross is earned all year. A single week with
/// unusually high pay is therefore taxed as if it were the yearly norm.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_weekly_paye;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// let tax = compute_weekly_paye(Decimal::from(500), &config).unwrap();
/// assert_eq!(tax, Decimal::from_str("66.5").unwrap());
/// ```
pub fn compute_weekly_paye(
    weekly_gross: Decimal,
    config: &JurisdictionConfig,
) -> EngineResult<Decimal> {
    ensure_non_negative("weekly_gross", weekly_gross)?;
    let annual_gross = checked_mul("weekly_gross", weekly_gross, WEEKS_PER_YEAR)?;
    let annual_tax = compute_paye(annual_gross, config)?;
    Ok(annual_tax / WEEKS_PER_YEAR)
}
