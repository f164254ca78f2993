//! Hours-sweep analysis.
//!
//! Evaluates the engine at every whole number of worked hours and classifies
//! each point by how much of the benefit survives, exposing the ranges where
//! extra work barely raises the money in hand.

use rust_decimal::Decimal;

use crate::calculation::{MAX_HOURS_PER_WEEK, compute_deductions, compute_gross};
use crate::config::JurisdictionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{HourPoint, PaySettings, SweepEvent, SweepResult, Zone};

/// Number of hours swept when the caller does not choose.
pub const DEFAULT_MAX_HOURS: u32 = 50;

/// A dead-zone hour adding less than this to the weekly total is stagnation.
pub const STAGNATION_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Sweeps worked hours from zero to `max_hours` inclusive.
///
/// For each hour the gross is `hourly_rate × hours`, loaded for holiday pay if
/// the settings ask for it. Net pay and benefit come from
/// [`compute_deductions`]. The point is tagged with a [`Zone`]:
///
/// 1. `Sweet` if the gross is inside the abatement free zone
/// 2. otherwise `Dead` if any benefit is left
/// 3. otherwise `Breakout`
///
/// Events are evaluated in order and the last matching one is kept:
///
/// - `Warning`: sweet zone, and the next hour's gross leaves the free zone
/// - `Stagnation`: dead zone (after hour zero), and the hour added less than
///   [`STAGNATION_THRESHOLD`]
/// - `Freedom`: breakout zone, and the previous hour still had benefit
///
/// A non-positive `hourly_rate` yields an empty result.
///
/// # Errors
///
/// Returns `ValidationError` if `max_hours` exceeds [`MAX_HOURS_PER_WEEK`],
/// the settings are out of range, or any hour's deductions exceed its gross.
///
/// # Examples
///
/// ```
/// use nz_pay_engine::analysis::sweep;
/// use nz_pay_engine::config::JurisdictionConfig;
/// use nz_pay_engine::models::{PaySettings, SweepEvent, Zone};
/// use rust_decimal::Decimal;
///
/// let config = JurisdictionConfig::builtin().unwrap();
/// let result = sweep(Decimal::from(25), &PaySettings::default(), 10, &config).unwrap();
///
/// assert_eq!(result.points.len(), 11);
/// assert_eq!(result.points[6].zone, Zone::Sweet);
/// assert_eq!(result.points[6].event, SweepEvent::Warning);
/// assert_eq!(result.points[7].zone, Zone::Dead);
/// assert_eq!(result.sweet_zone_end_hour, Some(6));
/// ```
pub fn sweep(
    hourly_rate: Decimal,
    settings: &PaySettings,
    max_hours: u32,
    config: &JurisdictionConfig,
) -> EngineResult<SweepResult> {
    if max_hours > MAX_HOURS_PER_WEEK {
        return Err(EngineError::validation(
            "max_hours",
            format!(
                "{} is more than the {} hours in a week",
                max_hours, MAX_HOURS_PER_WEEK
            ),
        ));
    }
    settings.validate()?;

    if hourly_rate <= Decimal::ZERO {
        return Ok(SweepResult::default());
    }

    let free_zone = config.benefit_abatement().free_zone_weekly;
    let mut result = SweepResult {
        points: Vec::with_capacity(max_hours as usize + 1),
        ..SweepResult::default()
    };

    for hours in 0..=max_hours {
        let gross = compute_gross(hourly_rate, Decimal::from(hours), settings)?;
        let breakdown = compute_deductions(gross, settings, config)?;
        let total = breakdown.take_home();

        let previous = result.points.last();
        let marginal_delta = previous.map_or(Decimal::ZERO, |p| total - p.total_weekly);
        let previous_benefit = previous.map(|p| p.benefit_weekly);

        let zone = classify_zone(gross, breakdown.benefit_weekly, free_zone);
        let next_gross = compute_gross(hourly_rate, Decimal::from(hours + 1), settings)?;
        let event = classify_event(
            zone,
            hours,
            marginal_delta,
            next_gross > free_zone,
            previous_benefit,
        );

        match zone {
            Zone::Sweet => result.sweet_zone_end_hour = Some(hours),
            Zone::Dead => result.dead_zone_end_hour = Some(hours),
            Zone::Breakout => {}
        }

        result.points.push(HourPoint {
            hours,
            gross_weekly: gross,
            net_weekly: breakdown.net_weekly,
            benefit_weekly: breakdown.benefit_weekly,
            total_weekly: total,
            marginal_delta,
            zone,
            event,
        });
    }

    Ok(result)
}

fn classify_zone(gross: Decimal, benefit: Decimal, free_zone: Decimal) -> Zone {
    if gross <= free_zone {
        Zone::Sweet
    } else if benefit > Decimal::ZERO {
        Zone::Dead
    } else {
        Zone::Breakout
    }
}

fn classify_event(
    zone: Zone,
    hours: u32,
    marginal_delta: Decimal,
    next_hour_leaves_free_zone: bool,
    previous_benefit: Option<Decimal>,
) -> SweepEvent {
    let mut event = SweepEvent::None;

    if zone == Zone::Sweet && next_hour_leaves_free_zone {
        event = SweepEvent::Warning;
    }
    if zone == Zone::Dead && hours > 0 && marginal_delta < STAGNATION_THRESHOLD {
        event = SweepEvent::Stagnation;
    }
    if zone == Zone::Breakout && previous_benefit.is_some_and(|b| b > Decimal::ZERO) {
        event = SweepEvent::Freedom;
    }

    event
}
