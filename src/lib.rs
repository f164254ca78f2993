//! Take-home pay engine for New Zealand worker-beneficiaries
//!
//! This crate calculates weekly PAYE, ACC levy, student loan and KiwiSaver
//! deductions, abates a main benefit against earned income, and sweeps worked
//! hours to show where extra work stops paying. It also keeps a simple weekly
//! income and expense ledger.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
