//! ACC earners' levy calculation.
//!
//! The levy is charged on annual liable earnings up to a cap, so the weekly
//! figure is derived from the annualized gross.

use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::EngineResult;

use super::paye::WEEKS_PER_YEAR;
use super::validation::{checked_mul, ensure_non_negative};

/// Computes the weekly ACC earners' levy.
///
/// The weekly gross is annualized, capped at the configured annual maximum,
/// multiplied by the levy rate and divided back to a week. The cap is only
/// meaningful if the same weekly gross is earned for the whole year.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_acc_levy;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// // 500 x 52 = 26000; 26000 x 1.6% / 52 = 8
/// assert_eq!(compute_acc_levy(Decimal::from(500), &config).unwrap(), Decimal::from(8));
/// ```
pub fn compute_acc_levy(weekly_gross: Decimal, config: &JurisdictionConfig) -> EngineResult<Decimal> {
    ensure_non_negative("weekly_gross", weekly_gross)?;

    let acc = config.acc();
    let liable_earnings =
        checked_mul("weekly_gross", weekly_gross, WEEKS_PER_YEAR)?.min(acc.annual_cap);
    Ok(liable_earnings * acc.rate / WEEKS_PER_YEAR)
}
