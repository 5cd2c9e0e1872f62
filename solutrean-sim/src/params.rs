//! User-facing crossing inputs and their derivation into simulation units.
use serde::{Deserialize, Serialize};

use crate::angle::OutOfRangePolicy;
use crate::constants::{
    DEFAULT_DISTANCE_KM, DEFAULT_HUNT_INTERVAL_DAYS, DEFAULT_ICE_DURATION_DAYS,
    DEFAULT_SPEED_KNOTS, DEFAULT_TRAVELING_HOURS, KM_PER_NAUTICAL_MILE, MAX_DEVIATION_LIMIT_DEG,
    MAX_GATHER_PCT, MAX_TRAVELING_HOURS, MIN_EFFECTIVE_HUNT_INTERVAL_DAYS,
    NO_HUNT_SENTINEL_DAYS,
};
use crate::error::{SimError, SimResult, ensure_above, ensure_within};
use crate::numbers::round_f64_to_u32;

/// Inputs for one crossing, in the units the GUI presents them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossingParams {
    /// Distance to the destination at day zero, in km.
    pub distance_km: f64,
    /// Maximum boat speed, in knots.
    pub speed_knots: f64,
    /// Hours spent traveling each day.
    pub traveling_hours: f64,
    /// Days of passable sea ice available for the crossing.
    pub ice_duration_days: u32,
    /// Largest deviation from the direct heading, in degrees.
    pub max_deviation_deg: f64,
    /// Base hunting interval in days, before calorie scaling.
    pub hunt_interval_days: u32,
    /// Percentage of calories gathered on the way instead of carried.
    pub gather_pct: f64,
    /// Record a per-day log.
    pub verbose: bool,
    pub deviation_policy: OutOfRangePolicy,
}

impl Default for CrossingParams {
    fn default() -> Self {
        Self {
            distance_km: DEFAULT_DISTANCE_KM,
            speed_knots: DEFAULT_SPEED_KNOTS,
            traveling_hours: DEFAULT_TRAVELING_HOURS,
            ice_duration_days: DEFAULT_ICE_DURATION_DAYS,
            max_deviation_deg: MAX_DEVIATION_LIMIT_DEG,
            hunt_interval_days: DEFAULT_HUNT_INTERVAL_DAYS,
            gather_pct: 0.0,
            verbose: false,
            deviation_policy: OutOfRangePolicy::default(),
        }
    }
}

/// Inputs translated into the metric units the simulator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedParams {
    pub initial_distance_km: f64,
    pub daily_distance_km: f64,
    /// Every `hunt_every_days`-th day is spent hunting.
    pub hunt_every_days: u32,
    pub ice_duration_days: u32,
    pub max_deviation_deg: f64,
}

impl CrossingParams {
    /// Check every input against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint; values are never clamped.
    pub fn validate(&self) -> SimResult<()> {
        ensure_above("distance_km", 0.0, self.distance_km)?;
        ensure_above("speed_knots", 0.0, self.speed_knots)?;
        ensure_above("traveling_hours", 0.0, self.traveling_hours)?;
        ensure_within(
            "traveling_hours",
            0.0,
            MAX_TRAVELING_HOURS,
            self.traveling_hours,
        )?;
        ensure_above("ice_duration_days", 0.0, f64::from(self.ice_duration_days))?;
        ensure_within(
            "max_deviation_deg",
            0.0,
            MAX_DEVIATION_LIMIT_DEG,
            self.max_deviation_deg,
        )?;
        ensure_above("hunt_interval_days", 0.0, f64::from(self.hunt_interval_days))?;
        ensure_within("gather_pct", 0.0, MAX_GATHER_PCT, self.gather_pct)?;
        Ok(())
    }

    /// Validate and translate into simulation units.
    ///
    /// # Errors
    ///
    /// Returns a validation error, [`SimError::DegenerateDailyDistance`] when
    /// the derived daily distance is not positive, or [`SimError::NoTravelDays`]
    /// when the effective hunting interval would turn every day into a hunt.
    pub fn derive(&self) -> SimResult<DerivedParams> {
        self.validate()?;
        let daily_distance_km = daily_distance_km(self.speed_knots, self.traveling_hours);
        if !(daily_distance_km > 0.0 && daily_distance_km.is_finite()) {
            return Err(SimError::DegenerateDailyDistance {
                daily_km: daily_distance_km,
            });
        }
        let hunt_every_days = effective_hunt_interval(self.hunt_interval_days, self.gather_pct);
        if hunt_every_days < MIN_EFFECTIVE_HUNT_INTERVAL_DAYS {
            return Err(SimError::NoTravelDays { hunt_every_days });
        }
        Ok(DerivedParams {
            initial_distance_km: self.distance_km,
            daily_distance_km,
            hunt_every_days,
            ice_duration_days: self.ice_duration_days,
            max_deviation_deg: self.max_deviation_deg,
        })
    }
}

/// Kilometres covered in one day at `speed_knots` for `traveling_hours`.
#[must_use]
pub fn daily_distance_km(speed_knots: f64, traveling_hours: f64) -> f64 {
    speed_knots * KM_PER_NAUTICAL_MILE * traveling_hours
}

/// Effective hunting interval in days.
///
/// Without gathering, hunting falls back to [`NO_HUNT_SENTINEL_DAYS`];
/// otherwise the base interval shrinks as the gathered share grows. The
/// result is at least one day.
#[must_use]
pub fn effective_hunt_interval(hunt_interval_days: u32, gather_pct: f64) -> u32 {
    if gather_pct <= 0.0 {
        return NO_HUNT_SENTINEL_DAYS;
    }
    let scaled = f64::from(hunt_interval_days) * (MAX_GATHER_PCT / gather_pct);
    round_f64_to_u32(scaled).max(1)
}
