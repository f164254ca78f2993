//! Configuration types for the jurisdiction tables.
//!
//! The file-level structures are deserialized from YAML and then validated
//! into a [`JurisdictionConfig`], which is the only form the engine accepts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying the jurisdiction and tax year a table applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "NZ").
    pub code: String,
    /// Human-readable name of the rule set.
    pub name: String,
    /// The tax year the tables are effective for (e.g., "2024-25").
    pub tax_year: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// A single PAYE bracket.
///
/// The lower bound is implied by the previous bracket's upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Annual income at which this bracket ends. `None` means unbounded.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income inside this bracket.
    pub rate: Decimal,
}

/// ACC earners' levy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccLevy {
    /// Levy rate applied to liable earnings.
    pub rate: Decimal,
    /// Maximum annual liable earnings.
    pub annual_cap: Decimal,
}

/// Student loan repayment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLoan {
    /// Weekly earnings below which no repayment is due.
    pub weekly_threshold: Decimal,
    /// Repayment rate on earnings above the threshold.
    pub rate: Decimal,
}

/// Main benefit abatement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitAbatement {
    /// Weekly gross earnings allowed before the benefit starts to reduce.
    pub free_zone_weekly: Decimal,
    /// Benefit reduction per dollar earned above the free zone.
    pub reduction_rate: Decimal,
}

/// Rates configuration file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// PAYE brackets in ascending order.
    pub tax_brackets: Vec<TaxBracket>,
    /// ACC earners' levy.
    pub acc: AccLevy,
    /// Student loan repayments.
    pub student_loan: StudentLoan,
    /// Benefit abatement.
    pub benefit_abatement: BenefitAbatement,
}

/// A validated, progressive PAYE bracket table.
///
/// Bounds strictly increase, only the final bracket is unbounded, and rates
/// never decrease from one bracket to the next. Together the brackets cover
/// `[0, ∞)` with no gaps or overlaps.
///
/// # Example
///
/// ```
/// use nz_pay_engine::config::{TaxBracket, TaxBracketTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxBracketTable::new(vec![
///     TaxBracket { upper_bound: Some(Decimal::from(10_000)), rate: Decimal::new(10, 2) },
///     TaxBracket { upper_bound: None, rate: Decimal::new(20, 2) },
/// ]).unwrap();
/// assert_eq!(table.brackets().len(), 2);
///
/// let missing_terminal = TaxBracketTable::new(vec![
///     TaxBracket { upper_bound: Some(Decimal::from(10_000)), rate: Decimal::new(10, 2) },
/// ]);
/// assert!(missing_terminal.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaxBracketTable(Vec<TaxBracket>);

impl TaxBracketTable {
    /// Validates and wraps an ordered list of brackets.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(last) = brackets.last() else {
            return Err(EngineError::configuration(
                "tax bracket table must not be empty",
            ));
        };
        if last.upper_bound.is_some() {
            return Err(EngineError::configuration(
                "final tax bracket must be unbounded",
            ));
        }

        let mut previous_bound = Decimal::ZERO;
        let mut previous_rate = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(EngineError::configuration(format!(
                    "tax bracket {} rate {} must be in [0, 1)",
                    index, bracket.rate
                )));
            }
            if bracket.rate < previous_rate {
                return Err(EngineError::configuration(format!(
                    "tax bracket {} rate {} is lower than the previous rate {}",
                    index, bracket.rate, previous_rate
                )));
            }
            previous_rate = bracket.rate;

            match bracket.upper_bound {
                Some(bound) if bound <= previous_bound => {
                    return Err(EngineError::configuration(format!(
                        "tax bracket {} upper bound {} must exceed {}",
                        index, bound, previous_bound
                    )));
                }
                Some(bound) => previous_bound = bound,
                None if index + 1 < brackets.len() => {
                    return Err(EngineError::configuration(format!(
                        "only the final tax bracket may be unbounded (bracket {})",
                        index
                    )));
                }
                None => {}
            }
        }

        Ok(Self(brackets))
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }
}

/// The complete, validated jurisdiction configuration.
///
/// Immutable once built. The engine takes it by reference on every call, so
/// a single instance can be shared for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionConfig {
    metadata: JurisdictionMetadata,
    tax_brackets: TaxBracketTable,
    acc: AccLevy,
    student_loan: StudentLoan,
    benefit_abatement: BenefitAbatement,
}

impl JurisdictionConfig {
    /// Builds a configuration from its parsed parts, validating every table.
    ///
    /// Returns `ConfigurationError` if the bracket table is malformed or any
    /// rate, cap or threshold is out of range.
    pub fn new(metadata: JurisdictionMetadata, rates: RatesConfig) -> EngineResult<Self> {
        let tax_brackets = TaxBracketTable::new(rates.tax_brackets)?;

        check_rate("acc.rate", rates.acc.rate)?;
        check_non_negative("acc.annual_cap", rates.acc.annual_cap)?;
        check_rate("student_loan.rate", rates.student_loan.rate)?;
        check_non_negative(
            "student_loan.weekly_threshold",
            rates.student_loan.weekly_threshold,
        )?;
        check_rate(
            "benefit_abatement.reduction_rate",
            rates.benefit_abatement.reduction_rate,
        )?;
        check_non_negative(
            "benefit_abatement.free_zone_weekly",
            rates.benefit_abatement.free_zone_weekly,
        )?;

        Ok(Self {
            metadata,
            tax_brackets,
            acc: rates.acc,
            student_loan: rates.student_loan,
            benefit_abatement: rates.benefit_abatement,
        })
    }

    /// Returns the configuration bundled with the crate.
    ///
    /// This is the same table shipped in `config/nz`, embedded at compile time.
    pub fn builtin() -> EngineResult<Self> {
        super::ConfigLoader::builtin().map(super::ConfigLoader::into_config)
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the PAYE bracket table.
    pub fn tax_brackets(&self) -> &TaxBracketTable {
        &self.tax_brackets
    }

    /// Returns the ACC earners' levy parameters.
    pub fn acc(&self) -> &AccLevy {
        &self.acc
    }

    /// Returns the student loan parameters.
    pub fn student_loan(&self) -> &StudentLoan {
        &self.student_loan
    }

    /// Returns the benefit abatement parameters.
    pub fn benefit_abatement(&self) -> &BenefitAbatement {
        &self.benefit_abatement
    }
}

fn check_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::configuration(format!(
            "{} {} must be in [0, 1]",
            field, rate
        )));
    }
    Ok(())
}

fn check_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::configuration(format!(
            "{} {} must not be negative",
            field, amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(upper: Option<&str>, rate: &str) -> TaxBracket {
        TaxBracket {
            upper_bound: upper.map(dec),
            rate: dec(rate),
        }
    }

    fn sample_metadata() -> JurisdictionMetadata {
        JurisdictionMetadata {
            code: "NZ".to_string(),
            name: "Test".to_string(),
            tax_year: "2024-25".to_string(),
            source_url: "https://example.invalid".to_string(),
        }
    }

    fn sample_rates() -> RatesConfig {
        RatesConfig {
            tax_brackets: vec![bracket(Some("15600"), "0.105"), bracket(None, "0.175")],
            acc: AccLevy {
                rate: dec("0.016"),
                annual_cap: dec("142283"),
            },
            student_loan: StudentLoan {
                weekly_threshold: dec("465"),
                rate: dec("0.12"),
            },
            benefit_abatement: BenefitAbatement {
                free_zone_weekly: dec("160"),
                reduction_rate: dec("0.70"),
            },
        }
    }

    #[test]
    fn test_valid_table_is_accepted() {
        let table = TaxBracketTable::new(vec![
            bracket(Some("15600"), "0.105"),
            bracket(Some("53500"), "0.175"),
            bracket(None, "0.39"),
        ]);
        assert!(table.is_ok());
        assert_eq!(table.unwrap().brackets().len(), 3);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = TaxBracketTable::new(vec![]);
        assert!(matches!(
            result,
            Err(EngineError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_missing_terminal_bracket_is_rejected() {
        let result = TaxBracketTable::new(vec![bracket(Some("15600"), "0.105")]);
        match result {
            Err(EngineError::ConfigurationError { message }) => {
                assert!(message.contains("unbounded"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_non_increasing_bounds_are_rejected() {
        let result = TaxBracketTable::new(vec![
            bracket(Some("53500"), "0.105"),
            bracket(Some("15600"), "0.175"),
            bracket(None, "0.39"),
        ]);
        match result {
            Err(EngineError::ConfigurationError { message }) => {
                assert!(message.contains("must exceed"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_unbounded_bracket_in_middle_is_rejected() {
        let result = TaxBracketTable::new(vec![
            bracket(Some("15600"), "0.105"),
            bracket(None, "0.175"),
            bracket(None, "0.39"),
        ]);
        assert!(matches!(
            result,
            Err(EngineError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_decreasing_rate_is_rejected() {
        let result = TaxBracketTable::new(vec![
            bracket(Some("15600"), "0.30"),
            bracket(None, "0.105"),
        ]);
        match result {
            Err(EngineError::ConfigurationError { message }) => {
                assert!(message.contains("lower than the previous rate"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_rate_of_one_is_rejected_for_brackets() {
        let result = TaxBracketTable::new(vec![bracket(None, "1.0")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_first_bound_is_rejected() {
        let result = TaxBracketTable::new(vec![bracket(Some("0"), "0.1"), bracket(None, "0.2")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_jurisdiction_config_accepts_sample_rates() {
        let config = JurisdictionConfig::new(sample_metadata(), sample_rates()).unwrap();
        assert_eq!(config.metadata().tax_year, "2024-25");
        assert_eq!(config.acc().annual_cap, dec("142283"));
        assert_eq!(config.student_loan().weekly_threshold, dec("465"));
        assert_eq!(config.benefit_abatement().free_zone_weekly, dec("160"));
    }

    #[test]
    fn test_jurisdiction_config_rejects_acc_rate_above_one() {
        let mut rates = sample_rates();
        rates.acc.rate = dec("1.5");
        let result = JurisdictionConfig::new(sample_metadata(), rates);
        match result {
            Err(EngineError::ConfigurationError { message }) => {
                assert!(message.contains("acc.rate"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_jurisdiction_config_rejects_negative_free_zone() {
        let mut rates = sample_rates();
        rates.benefit_abatement.free_zone_weekly = dec("-1");
        let result = JurisdictionConfig::new(sample_metadata(), rates);
        match result {
            Err(EngineError::ConfigurationError { message }) => {
                assert!(message.contains("free_zone_weekly"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_bracket_without_upper_bound_deserializes_as_unbounded() {
        let parsed: TaxBracket = serde_yaml::from_str("rate: \"0.39\"").unwrap();
        assert_eq!(parsed.upper_bound, None);
        assert_eq!(parsed.rate, dec("0.39"));
    }
}
