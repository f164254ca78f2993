//! Hours-sweep analysis built on the calculation engine.
//!
//! The analyzer runs the engine across a range of worked hours to expose
//! effective marginal tax rate traps: the sweet zone where the benefit is
//! untouched, the dead zone where it abates, and the breakout past it.

mod hours_sweep;

pub use hours_sweep::{DEFAULT_MAX_HOURS, STAGNATION_THRESHOLD, sweep};
