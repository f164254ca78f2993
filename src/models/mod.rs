//! Core data models for the NZ pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod hour_point;
mod pay_period_result;
mod pay_run;
mod settings;
mod transaction;

pub use hour_point::{HourPoint, SweepEvent, SweepResult, Zone};
pub use pay_period_result::PayPeriodResult;
pub use pay_run::{
    AuditStep, AuditTrace, AuditWarning, DEFAULT_CUSTOM_WEEKS, PayFrequency, PayRunRequest,
    PayRunResult, PayRunTotals, WeekResult,
};
pub use settings::{DEFAULT_BASE_WEEKLY_BENEFIT, DEFAULT_RETIREMENT_RATE, PaySettings};
pub use transaction::{NewTransaction, Transaction, TransactionKind, UNTITLED_LABEL};
