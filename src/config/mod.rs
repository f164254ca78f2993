//! Configuration loading and management for the NZ pay engine.
//!
//! This module loads the jurisdiction tables (PAYE brackets, ACC levy, student
//! loan and benefit abatement) from YAML files and validates them once.
//!
//! # Example
//!
//! ```no_run
//! use nz_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nz").unwrap();
//! println!("Loaded tax year: {}", config.metadata().tax_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccLevy, BenefitAbatement, JurisdictionConfig, JurisdictionMetadata, RatesConfig,
    StudentLoan, TaxBracket, TaxBracketTable,
};
