//! Per-calculation pay settings.
//!
//! This module contains the [`PaySettings`] type that carries the worker's
//! deduction choices and benefit entitlement into every engine call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weekly main benefit assumed when the caller does not supply one.
pub const DEFAULT_BASE_WEEKLY_BENEFIT: Decimal = Decimal::from_parts(401, 0, 0, false, 0);

/// Default KiwiSaver employee contribution rate (3%).
pub const DEFAULT_RETIREMENT_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// The worker's deduction choices and benefit entitlement for a calculation.
///
/// Settings are supplied fresh on every call and carry no identity. Missing
/// fields deserialize to the [`Default`] values.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::PaySettings;
/// use rust_decimal::Decimal;
///
/// let settings = PaySettings {
///     has_student_loan: true,
///     ..PaySettings::default()
/// };
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.base_weekly_benefit, Decimal::from(401));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaySettings {
    /// Whether 8% holiday pay is added to hourly earnings.
    pub has_holiday_loading: bool,
    /// Whether student loan repayments are deducted.
    pub has_student_loan: bool,
    /// Whether a KiwiSaver contribution is deducted.
    pub has_retirement_contribution: bool,
    /// KiwiSaver contribution rate, between 0 and 1.
    pub retirement_rate: Decimal,
    /// The unabated weekly benefit.
    pub base_weekly_benefit: Decimal,
}

impl Default for PaySettings {
    fn default() -> Self {
        Self {
            has_holiday_loading: false,
            has_student_loan: false,
            has_retirement_contribution: false,
            retirement_rate: DEFAULT_RETIREMENT_RATE,
            base_weekly_benefit: DEFAULT_BASE_WEEKLY_BENEFIT,
        }
    }
}

impl PaySettings {
    /// Checks that the rate and benefit fields are in range.
    ///
    /// The retirement rate is checked even when the contribution is switched off.
    pub fn validate(&self) -> EngineResult<()> {
        if self.retirement_rate < Decimal::ZERO || self.retirement_rate > Decimal::ONE {
            return Err(EngineError::validation(
                "retirement_rate",
                format!("{} must be between 0 and 1", self.retirement_rate),
            ));
        }
        if self.base_weekly_benefit < Decimal::ZERO {
            return Err(EngineError::validation(
                "base_weekly_benefit",
                format!("{} must not be negative", self.base_weekly_benefit),
            ));
        }
        Ok(())
    }
}
