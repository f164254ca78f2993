//! KiwiSaver retirement contribution calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::PaySettings;

use super::validation::ensure_non_negative;

/// Computes the weekly KiwiSaver employee contribution.
///
/// The contribution is a flat share of the weekly gross when
/// `has_retirement_contribution` is set, otherwise zero.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_retirement_contribution;
/// use nz_pay_engine::models::PaySettings;
/// use rust_decimal::Decimal;
///
/// let settings = PaySettings {
///     has_retirement_contribution: true,
///     ..PaySettings::default()
/// };
/// // 500 x 3%
/// let contribution = compute_retirement_contribution(Decimal::from(500), &settings).unwrap();
/// assert_eq!(contribution, Decimal::from(15));
/// ```
pub fn compute_retirement_contribution(
    weekly_gross: Decimal,
    settings: &PaySettings,
) -> EngineResult<Decimal> {
    ensure_non_negative("weekly_gross", weekly_gross)?;
    settings.validate()?;

    if !settings.has_retirement_contribution {
        return Ok(Decimal::ZERO);
    }

    Ok(weekly_gross * settings.retirement_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings(enabled: bool, rate: &str) -> PaySettings {
        PaySettings {
            has_retirement_contribution: enabled,
            retirement_rate: dec(rate),
            ..PaySettings::default()
        }
    }

    #[test]
    fn test_contribution_when_enabled() {
        let result = compute_retirement_contribution(dec("500"), &settings(true, "0.04"));
        assert_eq!(result.unwrap(), dec("20"));
    }

    #[test]
    fn test_no_contribution_when_disabled() {
        let result = compute_retirement_contribution(dec("500"), &settings(false, "0.04"));
        assert_eq!(result.unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_rate_is_rejected_even_when_disabled() {
        let result = compute_retirement_contribution(dec("500"), &settings(false, "1.2"));
        assert!(result.is_err());
    }
}
