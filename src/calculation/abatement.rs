//! Benefit abatement calculation.
//!
//! A main benefit is paid in full while weekly earnings stay inside the free
//! zone. Each dollar earned above it reduces the benefit by the reduction rate
//! until nothing is left.

use rust_decimal::Decimal;

use crate::config::JurisdictionConfig;
use crate::error::EngineResult;

use super::validation::ensure_non_negative;

/// Computes the weekly benefit remaining after abatement.
///
/// The result is always in `[0, base_benefit]`, never increases as gross
/// rises, and is continuous at the free-zone boundary.
///
/// # Arguments
///
/// * `weekly_gross` - Gross weekly earnings, must not be negative
/// * `base_benefit` - The unabated weekly benefit, must not be negative
/// * `config` - The jurisdiction configuration holding the free zone and rate
///
/// # Examples
///
/// ```
/// use nz_pay_engine::calculation::compute_abatement;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use rust_decimal::Decimal;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// // (500 - 160) x 70% = 238; 401 - 238 = 163
/// let benefit = compute_abatement(Decimal::from(500), Decimal::from(401), &config).unwrap();
/// assert_eq!(benefit, Decimal::from(163));
/// ```
pub fn compute_abatement(
    weekly_gross: Decimal,
    base_benefit: Decimal,
    config: &JurisdictionConfig,
) -> EngineResult<Decimal> {
    ensure_non_negative("weekly_gross", weekly_gross)?;
    ensure_non_negative("base_benefit", base_benefit)?;

    let abatement = config.benefit_abatement();
    if weekly_gross <= abatement.free_zone_weekly {
        return Ok(base_benefit);
    }

    let reduction = (weekly_gross - abatement.free_zone_weekly) * abatement.reduction_rate;
    Ok((base_benefit - reduction).max(Decimal::ZERO))
}
