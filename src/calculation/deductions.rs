//! Statutory deduction stack for one pay week.
//!
//! This module combines PAYE, the ACC levy, student loan repayments and the
//! KiwiSaver contribution into a single [`PayPeriodResult`], alongside the
//! abated benefit.

use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriodResult, PaySettings};

use super::abatement::compute_abatement;
use super::acc_levy::compute_acc_levy;
use super::paye::compute_weekly_paye;
use super::retirement::compute_retirement_contribution;
use super::student_loan::compute_student_loan;
use super::validation::ensure_non_negative;

/// Computes every deduction and the abated benefit for one week.
///
/// # Calculation
///
/// 1. PAYE on the annualized gross, divided back to a week
/// 2. ACC levy on the annualized gross, capped
/// 3. Student loan on earnings above the weekly threshold, if enabled
/// 4. KiwiSaver contribution on the whole gross, if enabled
/// 5. Benefit abated against the gross using `settings.base_weekly_benefit`
///
/// The function is pure: identical inputs always produce identical output.
///
/// # Errors
///
/// Returns `ValidationError` if the gross is negative, the settings are out of
/// range, the gross is too large to annualize, or the total deductions would
/// exceed the gross (negative net pay).
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_deductions;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use nz_pay_engine::models::PaySettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// let result = compute_deductions(Decimal::from(500), &PaySettings::default(), &config).unwrap();
///
/// assert_eq!(result.paye_weekly, Decimal::from_str("66.5").unwrap());
/// assert_eq!(result.acc_weekly, Decimal::from(8));
/// assert_eq!(result.net_weekly, Decimal::from_str("425.5").unwrap());
/// assert_eq!(result.benefit_weekly, Decimal::from(163));
/// ```
pub fn compute_deductions(
    weekly_gross: Decimal,
    settings: &PaySettings,
    config: &JurisdictionConfig,
) -> EngineResult<PayPeriodResult> {
    ensure_non_negative("weekly_gross", weekly_gross)?;
    settings.validate()?;

    let paye_weekly = compute_weekly_paye(weekly_gross, config)?;
    let acc_weekly = compute_acc_levy(weekly_gross, config)?;
    let student_loan_weekly = compute_student_loan(weekly_gross, settings.has_student_loan, config)?;
    let retirement_weekly = compute_retirement_contribution(weekly_gross, settings)?;

    let total_deductions = paye_weekly + acc_weekly + student_loan_weekly + retirement_weekly;
    if total_deductions > weekly_gross {
        return Err(EngineError::validation(
            "weekly_gross",
            format!(
                "total deductions of {} exceed weekly gross of {}",
                total_deductions.round_dp(2),
                weekly_gross
            ),
        ));
    }

    let benefit_weekly = compute_abatement(weekly_gross, settings.base_weekly_benefit, config)?;

    Ok(PayPeriodResult {
        gross_weekly: weekly_gross,
        paye_weekly,
        acc_weekly,
        student_loan_weekly,
        retirement_weekly,
        total_deductions,
        net_weekly: weekly_gross - total_deductions,
        benefit_weekly,
        benefit_reduction: settings.base_weekly_benefit - benefit_weekly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> JurisdictionConfig {
        JurisdictionConfig::builtin().unwrap()
    }

    #[test]
    fn test_deductions_with_defaults() {
        let result = compute_deductions(dec("500"), &PaySettings::default(), &config()).unwrap();

        assert_eq!(result.gross_weekly, dec("500"));
        assert_eq!(result.paye_weekly, dec("66.5"));
        assert_eq!(result.acc_weekly, dec("8"));
        assert_eq!(result.student_loan_weekly, Decimal::ZERO);
        assert_eq!(result.retirement_weekly, Decimal::ZERO);
        assert_eq!(result.total_deductions, dec("74.5"));
        assert_eq!(result.net_weekly, dec("425.5"));
        assert_eq!(result.benefit_weekly, dec("163"));
        assert_eq!(result.benefit_reduction, dec("238"));
        assert_eq!(result.take_home(), dec("588.5"));
    }

    #[test]
    fn test_deductions_with_loan_and_kiwisaver() {
        let settings = PaySettings {
            has_student_loan: true,
            has_retirement_contribution: true,
            retirement_rate: dec("0.03"),
            base_weekly_benefit: Decimal::ZERO,
            ..PaySettings::default()
        };
        let result = compute_deductions(dec("500"), &settings, &config()).unwrap();

        // (500 - 465) x 0.12 = 4.2; 500 x 0.03 = 15
        assert_eq!(result.student_loan_weekly, dec("4.2"));
        assert_eq!(result.retirement_weekly, dec("15"));
        assert_eq!(result.total_deductions, dec("93.7"));
        assert_eq!(result.net_weekly, dec("406.3"));
        assert_eq!(result.benefit_weekly, Decimal::ZERO);
        assert_eq!(result.benefit_reduction, Decimal::ZERO);
    }

    #[test]
    fn test_zero_gross_keeps_full_benefit() {
        let result = compute_deductions(Decimal::ZERO, &PaySettings::default(), &config()).unwrap();

        assert_eq!(result.total_deductions, Decimal::ZERO);
        assert_eq!(result.net_weekly, Decimal::ZERO);
        assert_eq!(result.benefit_weekly, dec("401"));
        assert_eq!(result.benefit_reduction, Decimal::ZERO);
    }

    #[test]
    fn test_benefit_reduction_is_capped_at_base() {
        let result = compute_deductions(dec("2000"), &PaySettings::default(), &config()).unwrap();

        assert_eq!(result.benefit_weekly, Decimal::ZERO);
        assert_eq!(result.benefit_reduction, dec("401"));
    }

    #[test]
    fn test_deductions_are_idempotent() {
        let config = config();
        let settings = PaySettings {
            has_student_loan: true,
            has_retirement_contribution: true,
            ..PaySettings::default()
        };

        let first = compute_deductions(dec("987.65"), &settings, &config).unwrap();
        let second = compute_deductions(dec("987.65"), &settings, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_deductions_exceeding_gross_are_rejected() {
        let settings = PaySettings {
            has_retirement_contribution: true,
            retirement_rate: dec("0.95"),
            ..PaySettings::default()
        };

        match compute_deductions(dec("1000"), &settings, &config()) {
            Err(EngineError::ValidationError { field, message }) => {
                assert_eq!(field, "weekly_gross");
                assert!(message.contains("total deductions"));
                assert!(message.contains("exceed weekly gross"));
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_negative_gross_is_rejected() {
        assert!(compute_deductions(dec("-1"), &PaySettings::default(), &config()).is_err());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = PaySettings {
            base_weekly_benefit: dec("-10"),
            ..PaySettings::default()
        };
        assert!(compute_deductions(dec("100"), &settings, &config()).is_err());
    }

    #[test]
    fn test_gross_too_large_to_annualize_is_rejected() {
        let result = compute_deductions(
            dec("7000000000000000000000000000"),
            &PaySettings::default(),
            &config(),
        );

        match result {
            Err(EngineError::ValidationError { field, message }) => {
                assert_eq!(field, "weekly_gross");
                assert!(message.contains("too large"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_annualizable_gross_is_accepted() {
        // Decimal::MAX / 52, rounded down
        let gross = (Decimal::MAX / Decimal::from(52)).floor();
        let result = compute_deductions(gross, &PaySettings::default(), &config()).unwrap();
        assert_eq!(result.gross_weekly, gross);
        assert_eq!(result.benefit_weekly, Decimal::ZERO);
    }
}
