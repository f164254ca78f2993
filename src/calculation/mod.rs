//! Calculation logic for the NZ pay engine.
//!
//! This module contains the tax and benefit engine: PAYE on the progressive
//! bracket table, the ACC earners' levy, student loan repayments, KiwiSaver
//! contributions, holiday pay loading, benefit abatement, the combined weekly
//! deduction stack, and multi-week pay runs.

mod abatement;
mod acc_levy;
mod deductions;
mod holiday_pay;
mod pay_run;
mod paye;
mod retirement;
mod student_loan;
mod validation;

pub use abatement::compute_abatement;
pub use acc_levy::compute_acc_levy;
pub use deductions::compute_deductions;
pub use holiday_pay::{compute_gross, holiday_pay_multiplier};
pub use pay_run::{MAX_HOURS_PER_WEEK, calculate_pay_run};
pub use paye::{WEEKS_PER_YEAR, compute_paye, compute_weekly_paye};
pub use retirement::compute_retirement_contribution;
pub use student_loan::compute_student_loan;
