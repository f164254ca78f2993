//! Holiday pay loading and gross earnings for a number of hours.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::PaySettings;

use super::validation::{checked_mul, ensure_non_negative};

/// Returns the holiday pay multiplier for casual hourly earnings.
///
/// The multiplier is 1.08 (8% holiday pay paid as you go).
pub fn holiday_pay_multiplier() -> Decimal {
    Decimal::new(108, 2)
}

/// Computes gross weekly earnings for the given hours.
///
/// `hourly_rate × hours`, loaded by [`holiday_pay_multiplier`] when the
/// settings ask for holiday pay.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_gross;
/// use nz_pay_engine::models::PaySettings;
/// use rust_decimal::Decimal;
///
/// let settings = PaySettings {
///     has_holiday_loading: true,
///     ..PaySettings::default()
/// };
/// let gross = compute_gross(Decimal::from(25), Decimal::from(10), &settings).unwrap();
/// assert_eq!(gross, Decimal::from(270));
/// ```
pub fn compute_gross(
    hourly_rate: Decimal,
    hours: Decimal,
    settings: &PaySettings,
) -> EngineResult<Decimal> {
    ensure_non_negative("hourly_rate", hourly_rate)?;
    ensure_non_negative("hours", hours)?;

    let gross = checked_mul("hourly_rate", hourly_rate, hours)?;
    if settings.has_holiday_loading {
        checked_mul("hourly_rate", gross, holiday_pay_multiplier())
    } else {
        Ok(gross)
    }
}
