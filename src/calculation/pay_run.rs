//! Multi-week pay run calculation.
//!
//! A pay run applies the engine to each week's hours independently and sums
//! the results, recording an audit step for every rule applied.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::JurisdictionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayPeriodResult, PayRunRequest, PayRunResult,
    PayRunTotals, PaySettings, WeekResult,
};

use super::deductions::compute_deductions;
use super::holiday_pay::{compute_gross, holiday_pay_multiplier};
use super::paye::WEEKS_PER_YEAR;
use super::validation::{checked_add, ensure_non_negative};

/// Hours in a calendar week; no single week can report more.
pub const MAX_HOURS_PER_WEEK: u32 = 168;

/// Calculates pay, deductions and abated benefit for every week of a pay run.
///
/// Each week is calculated on its own, so a high week and a low week are
/// each taxed at their own annualized rate rather than averaged.
///
/// # Errors
///
/// Returns `ValidationError` if:
/// - `weekly_hours` is empty, or its length disagrees with `frequency`
/// - the hourly rate or any week's hours are negative
/// - any week reports more than [`MAX_HOURS_PER_WEEK`] hours
/// - the settings are out of range, or a week's deductions exceed its gross
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::calculate_pay_run;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use nz_pay_engine::models::{PayRunRequest, PaySettings};
/// use rust_decimal::Decimal;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// let request = PayRunRequest {
///     hourly_rate: Decimal::from(25),
///     weekly_hours: vec![Decimal::from(20), Decimal::from(20)],
///     frequency: None,
///     settings: PaySettings::default(),
/// };
///
/// let result = calculate_pay_run(&request, &config).unwrap();
/// assert_eq!(result.weeks.len(), 2);
/// assert_eq!(result.totals.gross, Decimal::from(1000));
/// ```
pub fn calculate_pay_run(
    request: &PayRunRequest,
    config: &JurisdictionConfig,
) -> EngineResult<PayRunResult> {
    let start_time = Instant::now();
    validate_request(request)?;

    let mut weeks = Vec::with_capacity(request.weekly_hours.len());
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut totals = PayRunTotals::default();
    let mut step_number: u32 = 1;

    for (index, hours) in request.weekly_hours.iter().enumerate() {
        let week_number = index as u32 + 1;
        let gross = compute_gross(request.hourly_rate, *hours, &request.settings)?;
        let breakdown = compute_deductions(gross, &request.settings, config)?;

        for step in week_audit_steps(
            week_number,
            request.hourly_rate,
            *hours,
            &request.settings,
            &breakdown,
            config,
        ) {
            steps.push(AuditStep {
                step_number,
                ..step
            });
            step_number += 1;
        }
        warnings.extend(week_warnings(week_number, &request.settings, &breakdown));

        let take_home = breakdown.take_home();
        totals.gross = checked_add("weekly_hours", totals.gross, breakdown.gross_weekly)?;
        totals.deductions =
            checked_add("weekly_hours", totals.deductions, breakdown.total_deductions)?;
        totals.net = checked_add("weekly_hours", totals.net, breakdown.net_weekly)?;
        totals.benefit = checked_add("weekly_hours", totals.benefit, breakdown.benefit_weekly)?;
        totals.take_home = checked_add("weekly_hours", totals.take_home, take_home)?;

        weeks.push(WeekResult {
            week_number,
            hours: *hours,
            breakdown,
            take_home,
        });
    }

    Ok(PayRunResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: config.metadata().tax_year.clone(),
        weeks,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn validate_request(request: &PayRunRequest) -> EngineResult<()> {
    ensure_non_negative("hourly_rate", request.hourly_rate)?;
    request.settings.validate()?;

    if request.weekly_hours.is_empty() {
        return Err(EngineError::validation(
            "weekly_hours",
            "at least one week of hours is required",
        ));
    }

    if let Some(frequency) = request.frequency {
        let expected = frequency.week_count();
        if expected == 0 {
            return Err(EngineError::validation(
                "frequency",
                "a custom pay frequency needs at least one week",
            ));
        }
        if request.weekly_hours.len() != expected as usize {
            return Err(EngineError::validation(
                "weekly_hours",
                format!(
                    "expected {} weeks of hours, got {}",
                    expected,
                    request.weekly_hours.len()
                ),
            ));
        }
    }

    let max_hours = Decimal::from(MAX_HOURS_PER_WEEK);
    for (index, hours) in request.weekly_hours.iter().enumerate() {
        ensure_non_negative("weekly_hours", *hours)?;
        if *hours > max_hours {
            return Err(EngineError::validation(
                "weekly_hours",
                format!(
                    "week {} has {} hours, more than the {} in a week",
                    index + 1,
                    hours,
                    MAX_HOURS_PER_WEEK
                ),
            ));
        }
    }

    Ok(())
}

/// Builds the audit steps for one week. Step numbers are assigned by the caller.
fn week_audit_steps(
    week_number: u32,
    hourly_rate: Decimal,
    hours: Decimal,
    settings: &PaySettings,
    breakdown: &PayPeriodResult,
    config: &JurisdictionConfig,
) -> Vec<AuditStep> {
    let step = |rule_id: &str,
                rule_name: &str,
                input: serde_json::Value,
                output: serde_json::Value,
                reasoning: String| AuditStep {
        step_number: 0,
        week_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    };

    let gross = breakdown.gross_weekly;
    let annual_gross = gross * WEEKS_PER_YEAR;
    let multiplier = if settings.has_holiday_loading {
        holiday_pay_multiplier()
    } else {
        Decimal::ONE
    };

    let mut steps = vec![
        step(
            "gross_earnings",
            "Gross Earnings",
            serde_json::json!({
                "hourly_rate": hourly_rate.normalize().to_string(),
                "hours": hours.normalize().to_string(),
                "holiday_loading": settings.has_holiday_loading
            }),
            serde_json::json!({
                "gross_weekly": gross.normalize().to_string()
            }),
            format!(
                "${} x {}h x {} = ${}",
                hourly_rate.normalize(),
                hours.normalize(),
                multiplier.normalize(),
                gross.round_dp(2)
            ),
        ),
        step(
            "paye",
            "PAYE Income Tax",
            serde_json::json!({
                "weekly_gross": gross.normalize().to_string(),
                "annual_gross": annual_gross.normalize().to_string()
            }),
            serde_json::json!({
                "paye_weekly": breakdown.paye_weekly.normalize().to_string()
            }),
            format!(
                "Tax on ${} annual income across {} brackets, divided by 52 = ${}",
                annual_gross.round_dp(2),
                config.tax_brackets().brackets().len(),
                breakdown.paye_weekly.round_dp(2)
            ),
        ),
        step(
            "acc_levy",
            "ACC Earners' Levy",
            serde_json::json!({
                "annual_gross": annual_gross.normalize().to_string(),
                "annual_cap": config.acc().annual_cap.normalize().to_string(),
                "rate": config.acc().rate.normalize().to_string()
            }),
            serde_json::json!({
                "acc_weekly": breakdown.acc_weekly.normalize().to_string(),
                "capped": annual_gross > config.acc().annual_cap
            }),
            format!(
                "${} x {} / 52 = ${}",
                annual_gross.min(config.acc().annual_cap).round_dp(2),
                config.acc().rate.normalize(),
                breakdown.acc_weekly.round_dp(2)
            ),
        ),
    ];

    let loan = config.student_loan();
    steps.push(step(
        "student_loan",
        "Student Loan Repayment",
        serde_json::json!({
            "weekly_gross": gross.normalize().to_string(),
            "has_student_loan": settings.has_student_loan,
            "weekly_threshold": loan.weekly_threshold.normalize().to_string()
        }),
        serde_json::json!({
            "student_loan_weekly": breakdown.student_loan_weekly.normalize().to_string()
        }),
        if !settings.has_student_loan {
            "No student loan repayment - no loan recorded".to_string()
        } else if gross <= loan.weekly_threshold {
            format!(
                "No repayment - ${} is at or below the ${} threshold",
                gross.round_dp(2),
                loan.weekly_threshold.normalize()
            )
        } else {
            format!(
                "(${} - ${}) x {} = ${}",
                gross.round_dp(2),
                loan.weekly_threshold.normalize(),
                loan.rate.normalize(),
                breakdown.student_loan_weekly.round_dp(2)
            )
        },
    ));

    steps.push(step(
        "kiwisaver",
        "KiwiSaver Contribution",
        serde_json::json!({
            "weekly_gross": gross.normalize().to_string(),
            "has_retirement_contribution": settings.has_retirement_contribution,
            "retirement_rate": settings.retirement_rate.normalize().to_string()
        }),
        serde_json::json!({
            "retirement_weekly": breakdown.retirement_weekly.normalize().to_string()
        }),
        if settings.has_retirement_contribution {
            format!(
                "${} x {} = ${}",
                gross.round_dp(2),
                settings.retirement_rate.normalize(),
                breakdown.retirement_weekly.round_dp(2)
            )
        } else {
            "No KiwiSaver contribution - not enrolled".to_string()
        },
    ));

    let abatement = config.benefit_abatement();
    steps.push(step(
        "benefit_abatement",
        "Benefit Abatement",
        serde_json::json!({
            "weekly_gross": gross.normalize().to_string(),
            "base_benefit": settings.base_weekly_benefit.normalize().to_string(),
            "free_zone_weekly": abatement.free_zone_weekly.normalize().to_string(),
            "reduction_rate": abatement.reduction_rate.normalize().to_string()
        }),
        serde_json::json!({
            "benefit_weekly": breakdown.benefit_weekly.normalize().to_string(),
            "benefit_reduction": breakdown.benefit_reduction.normalize().to_string()
        }),
        if gross <= abatement.free_zone_weekly {
            format!(
                "No abatement - ${} is inside the ${} free zone",
                gross.round_dp(2),
                abatement.free_zone_weekly.normalize()
            )
        } else {
            format!(
                "(${} - ${}) x {} = ${} reduction; ${} - ${} = ${}",
                gross.round_dp(2),
                abatement.free_zone_weekly.normalize(),
                abatement.reduction_rate.normalize(),
                ((gross - abatement.free_zone_weekly) * abatement.reduction_rate).round_dp(2),
                settings.base_weekly_benefit.round_dp(2),
                breakdown.benefit_reduction.round_dp(2),
                breakdown.benefit_weekly.round_dp(2)
            )
        },
    ));

    steps
}

fn week_warnings(
    week_number: u32,
    settings: &PaySettings,
    breakdown: &PayPeriodResult,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if settings.base_weekly_benefit > Decimal::ZERO {
        if breakdown.benefit_weekly.is_zero() {
            warnings.push(AuditWarning {
                code: "BENEFIT_FULLY_ABATED".to_string(),
                message: format!("Week {} earnings remove the whole benefit", week_number),
                severity: "low".to_string(),
            });
        } else if breakdown.benefit_reduction > Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "BENEFIT_ABATING".to_string(),
                message: format!(
                    "Week {} earnings are above the free zone; the benefit is reduced by ${}",
                    week_number,
                    breakdown.benefit_reduction.round_dp(2)
                ),
                severity: "medium".to_string(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayFrequency;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> JurisdictionConfig {
        JurisdictionConfig::builtin().unwrap()
    }

    fn request(hours: &[&str]) -> PayRunRequest {
        PayRunRequest {
            hourly_rate: dec("25"),
            weekly_hours: hours.iter().map(|h| dec(h)).collect(),
            frequency: None,
            settings: PaySettings::default(),
        }
    }

    #[test]
    fn test_single_week_matches_engine() {
        let config = config();
        let result = calculate_pay_run(&request(&["20"]), &config).unwrap();
        let expected = compute_deductions(dec("500"), &PaySettings::default(), &config).unwrap();

        assert_eq!(result.weeks.len(), 1);
        assert_eq!(result.weeks[0].week_number, 1);
        assert_eq!(result.weeks[0].breakdown, expected);
        assert_eq!(result.weeks[0].take_home, dec("588.5"));
        assert_eq!(result.totals.take_home, dec("588.5"));
        assert_eq!(result.tax_year, "2024-25");
    }

    #[test]
    fn test_weeks_are_calculated_independently() {
        let result = calculate_pay_run(&request(&["0", "20"]), &config()).unwrap();

        assert_eq!(result.weeks[0].take_home, dec("401"));
        assert_eq!(result.weeks[1].take_home, dec("588.5"));
        assert_eq!(result.totals.gross, dec("500"));
        assert_eq!(result.totals.benefit, dec("564"));
        assert_eq!(result.totals.take_home, dec("989.5"));
        assert_eq!(
            result.totals.take_home,
            result.totals.net + result.totals.benefit
        );
    }

    #[test]
    fn test_audit_steps_are_numbered_sequentially() {
        let result = calculate_pay_run(&request(&["10", "20"]), &config()).unwrap();
        let steps = &result.audit_trace.steps;

        assert_eq!(steps.len(), 12);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
        assert_eq!(steps[0].rule_id, "gross_earnings");
        assert_eq!(steps[0].week_number, 1);
        assert_eq!(steps[6].rule_id, "gross_earnings");
        assert_eq!(steps[6].week_number, 2);
        assert_eq!(steps[11].rule_id, "benefit_abatement");
    }

    #[test]
    fn test_abatement_reasoning_explains_reduction() {
        let result = calculate_pay_run(&request(&["20"]), &config()).unwrap();
        let abatement = result
            .audit_trace
            .steps
            .iter()
            .find(|s| s.rule_id == "benefit_abatement")
            .unwrap();

        assert!(abatement.reasoning.contains("$238.00 reduction"));
        assert_eq!(abatement.output["benefit_weekly"].as_str().unwrap(), "163");
    }

    #[test]
    fn test_warnings_flag_abating_and_exhausted_benefit() {
        let result = calculate_pay_run(&request(&["4", "20", "80"]), &config()).unwrap();
        let codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();

        assert_eq!(codes, vec!["BENEFIT_ABATING", "BENEFIT_FULLY_ABATED"]);
    }

    #[test]
    fn test_frequency_must_match_week_count() {
        let mut req = request(&["10"]);
        req.frequency = Some(PayFrequency::Fortnightly);

        match calculate_pay_run(&req, &config()) {
            Err(EngineError::ValidationError { field, message }) => {
                assert_eq!(field, "weekly_hours");
                assert!(message.contains("expected 2 weeks"));
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_custom_frequency_with_default_weeks() {
        let mut req = request(&["10", "10", "10", "10"]);
        req.frequency = Some(PayFrequency::Custom(None));

        let result = calculate_pay_run(&req, &config()).unwrap();
        assert_eq!(result.weeks.len(), 4);
    }

    #[test]
    fn test_zero_week_custom_frequency_is_rejected() {
        let mut req = request(&["10"]);
        req.frequency = Some(PayFrequency::Custom(Some(0)));
        assert!(calculate_pay_run(&req, &config()).is_err());
    }

    #[test]
    fn test_empty_weeks_are_rejected() {
        assert!(calculate_pay_run(&request(&[]), &config()).is_err());
    }

    #[test]
    fn test_negative_and_impossible_hours_are_rejected() {
        assert!(calculate_pay_run(&request(&["-1"]), &config()).is_err());
        assert!(calculate_pay_run(&request(&["169"]), &config()).is_err());
    }

    #[test]
    fn test_holiday_loading_applies_to_every_week() {
        let mut req = request(&["10", "10"]);
        req.settings.has_holiday_loading = true;

        let result = calculate_pay_run(&req, &config()).unwrap();
        assert_eq!(result.weeks[0].breakdown.gross_weekly, dec("270"));
        assert_eq!(result.totals.gross, dec("540"));
        assert!(result.audit_trace.steps[0].reasoning.contains("1.08"));
    }

    #[test]
    fn test_oversized_hourly_rate_is_rejected_not_panicking() {
        let request = PayRunRequest {
            hourly_rate: dec("1000000000000000000000000000"),
            ..request(&["40"])
        };

        match calculate_pay_run(&request, &config()) {
            Err(EngineError::ValidationError { message, .. }) => {
                assert!(message.contains("too large"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
