//! Hours-sweep output models.
//!
//! This module contains the [`HourPoint`] rows produced by the hours-sweep
//! analyzer, their [`Zone`] and [`SweepEvent`] tags, and the [`SweepResult`]
//! that bundles a whole sweep with its zone boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a number of worked hours sits relative to benefit abatement.
///
/// # Example
///
/// ```
/// use nz_pay_engine::models::Zone;
///
/// assert_eq!(serde_json::to_string(&Zone::Dead).unwrap(), "\"dead\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Gross is inside the free zone; the benefit is untouched.
    Sweet,
    /// The benefit is abating while wages are also taxed.
    Dead,
    /// The benefit has been fully abated; income is wage-only.
    Breakout,
}

/// A notable event at a single point of the sweep.
///
/// Events are evaluated in the order `Warning`, `Stagnation`, `Freedom`, and
/// the last one whose condition holds is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepEvent {
    /// Nothing notable.
    #[default]
    None,
    /// Last sweet-zone hour: one more hour crosses the free zone.
    Warning,
    /// Dead zone, and the extra hour added less than two dollars.
    Stagnation,
    /// First hour with the benefit fully abated.
    Freedom,
}

/// One row of an hours sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourPoint {
    /// Hours worked in the week.
    pub hours: u32,
    /// Gross weekly earnings for these hours.
    pub gross_weekly: Decimal,
    /// Net weekly pay after all deductions.
    pub net_weekly: Decimal,
    /// Benefit remaining after abatement.
    pub benefit_weekly: Decimal,
    /// Net pay plus benefit.
    pub total_weekly: Decimal,
    /// Change in `total_weekly` from the previous hour (zero at hour 0).
    pub marginal_delta: Decimal,
    /// Zone classification.
    pub zone: Zone,
    /// Notable event at this hour, if any.
    pub event: SweepEvent,
}

/// The ordered output of an hours sweep.
///
/// `sweet_zone_end_hour` and `dead_zone_end_hour` are the last hours tagged
/// with each zone, used for shading chart regions. They are `None` when no
/// point fell in that zone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweepResult {
    /// One point per hour, ascending from zero.
    pub points: Vec<HourPoint>,
    /// Last hour classified [`Zone::Sweet`].
    pub sweet_zone_end_hour: Option<u32>,
    /// Last hour classified [`Zone::Dead`].
    pub dead_zone_end_hour: Option<u32>,
}

impl SweepResult {
    /// Returns `true` if the sweep produced no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point for the given hour, if it was swept.
    pub fn point(&self, hours: u32) -> Option<&HourPoint> {
        self.points.get(hours as usize)
    }

    /// Returns the points tagged with the given zone.
    pub fn zone_points(&self, zone: Zone) -> impl Iterator<Item = &HourPoint> {
        self.points.iter().filter(move |p| p.zone == zone)
    }
}
