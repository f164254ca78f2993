//! Pay run models for multi-week calculations.
//!
//! This module contains the [`PayRunRequest`] and [`PayRunResult`] types and
//! their associated structures: per-week results, totals, and the audit trace
//! that records every deduction and abatement decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayPeriodResult, PaySettings};

/// Number of weeks a custom pay frequency uses when none is given.
pub const DEFAULT_CUSTOM_WEEKS: u32 = 4;

/// How many weeks a pay run covers.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::PayFrequency;
///
/// assert_eq!(PayFrequency::Weekly.week_count(), 1);
/// assert_eq!(PayFrequency::Fortnightly.week_count(), 2);
/// assert_eq!(PayFrequency::Custom(Some(6)).week_count(), 6);
/// assert_eq!(PayFrequency::Custom(None).week_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// A single week.
    Weekly,
    /// Two weeks.
    Fortnightly,
    /// A caller-chosen number of weeks. `None` falls back to [`DEFAULT_CUSTOM_WEEKS`].
    Custom(Option<u32>),
}

impl PayFrequency {
    /// Returns the number of weekly hour entries this frequency expects.
    pub fn week_count(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 1,
            PayFrequency::Fortnightly => 2,
            PayFrequency::Custom(Some(weeks)) => *weeks,
            PayFrequency::Custom(None) => DEFAULT_CUSTOM_WEEKS,
        }
    }
}

/// Input for a pay run: one hours entry per week at a single hourly rate.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::{PayFrequency, PayRunRequest, PaySettings};
/// use rust_decimal::Decimal;
///
/// let request = PayRunRequest {
///     hourly_rate: Decimal::from(25),
///     weekly_hours: vec![Decimal::from(10), Decimal::from(12)],
///     frequency: Some(PayFrequency::Fortnightly),
///     settings: PaySettings::default(),
/// };
/// assert_eq!(request.weekly_hours.len() as u32, PayFrequency::Fortnightly.week_count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunRequest {
    /// Hourly wage before holiday loading.
    pub hourly_rate: Decimal,
    /// Hours worked in each week, in order.
    pub weekly_hours: Vec<Decimal>,
    /// Optional frequency; when present it must match the number of weeks.
    #[serde(default)]
    pub frequency: Option<PayFrequency>,
    /// Deduction choices and benefit entitlement.
    #[serde(default)]
    pub settings: PaySettings,
}

/// The result for a single week of a pay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResult {
    /// One-based week number within the run.
    pub week_number: u32,
    /// Hours worked that week.
    pub hours: Decimal,
    /// The engine's breakdown for the week.
    pub breakdown: PayPeriodResult,
    /// Net pay plus benefit for the week.
    pub take_home: Decimal,
}

/// Aggregated totals across every week of a pay run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayRunTotals {
    /// Total gross earnings.
    pub gross: Decimal,
    /// Total deductions (PAYE, ACC, student loan, KiwiSaver).
    pub deductions: Decimal,
    /// Total net pay.
    pub net: Decimal,
    /// Total benefit after abatement.
    pub benefit: Decimal,
    /// Total money in hand (net plus benefit).
    pub take_home: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one rule applied
/// to one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The week the step applies to.
    pub week_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a pay run.
///
/// Warnings flag outcomes worth a second look but never stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a pay run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRunResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year of the jurisdiction tables used.
    pub tax_year: String,
    /// Per-week results in order.
    pub weeks: Vec<WeekResult>,
    /// Totals across all weeks.
    pub totals: PayRunTotals,
    /// Audit trace of every decision.
    pub audit_trace: AuditTrace,
}
