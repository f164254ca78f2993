//! Request types for the NZ pay engine API.
//!
//! The `/pay-run` endpoint accepts [`PayRunRequest`](crate::models::PayRunRequest)
//! directly; the single-week and sweep endpoints use the types below.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_MAX_HOURS;
use crate::models::PaySettings;

/// Request body for the `/deductions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsRequest {
    /// Gross weekly earnings.
    pub weekly_gross: Decimal,
    /// Deduction choices and benefit entitlement.
    #[serde(default)]
    pub settings: PaySettings,
}

/// Request body for the `/sweep` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Hourly wage before holiday loading.
    pub hourly_rate: Decimal,
    /// Deduction choices and benefit entitlement.
    #[serde(default)]
    pub settings: PaySettings,
    /// Highest number of hours to sweep to.
    #[serde(default = "default_max_hours")]
    pub max_hours: u32,
}

fn default_max_hours() -> u32 {
    DEFAULT_MAX_HOURS
}
