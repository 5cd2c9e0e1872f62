//! Day-by-day crossing simulation.
//!
//! Each day the traveler either hunts (no movement) or covers one day's
//! distance along a heading that deviates from the direct course; the
//! remaining distance is then recomputed with the law of cosines. The
//! crossing ends once the remaining distance fits within one day's travel.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::angle::AngleSampler;
use crate::constants::MAX_SIMULATED_DAYS;
use crate::error::{SimError, SimResult};
use crate::geometry::update_distance;
use crate::params::{CrossingParams, DerivedParams};
use crate::rng::CountingRng;

/// Final verdict of a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Arrived before the sea ice ran out.
    Success,
    /// Still at sea when the sea ice ran out.
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// What happened on a single simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum DayEvent {
    Hunt { remaining_km: f64 },
    Travel { angle_deg: f64, remaining_km: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    #[serde(flatten)]
    pub event: DayEvent,
}

impl DayRecord {
    #[must_use]
    pub const fn remaining_km(&self) -> f64 {
        match self.event {
            DayEvent::Hunt { remaining_km } | DayEvent::Travel { remaining_km, .. } => remaining_km,
        }
    }

    #[must_use]
    pub const fn is_hunt(&self) -> bool {
        matches!(self.event, DayEvent::Hunt { .. })
    }
}

impl fmt::Display for DayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.event {
            DayEvent::Hunt { remaining_km } => write!(
                f,
                "Day {}: hunting, no distance covered ({remaining_km:.2} km remaining)",
                self.day
            ),
            DayEvent::Travel {
                angle_deg,
                remaining_km,
            } => write!(
                f,
                "Day {}: angle is {angle_deg:.2}°, new distance is {remaining_km:.2} km",
                self.day
            ),
        }
    }
}

/// Everything a caller needs to know about a finished crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingReport {
    pub outcome: Outcome,
    /// Elapsed days, including the final partial day.
    pub days: u32,
    pub travel_days: u32,
    pub hunt_days: u32,
    pub initial_distance_km: f64,
    pub daily_distance_km: f64,
    pub final_remaining_km: f64,
    pub ice_duration_days: u32,
    pub hunt_every_days: u32,
    /// Random draws consumed by travel days. Hunting days draw nothing.
    pub rng_draws: u64,
    /// Per-day records; empty unless the run was verbose.
    pub log: Vec<DayRecord>,
}

impl CrossingReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Per-day log rendered as text lines, in day order.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }
}

/// Steppable crossing state. [`simulate_crossing`] drives one to completion.
#[derive(Debug, Clone)]
pub struct CrossingSession {
    derived: DerivedParams,
    sampler: AngleSampler,
    remaining_km: f64,
    day: u32,
    travel_days: u32,
    hunt_days: u32,
    rng_draws: u64,
    verbose: bool,
    log: Vec<DayRecord>,
}

impl CrossingSession {
    /// Validate the inputs and position the traveler at day zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range inputs or a degenerate
    /// daily distance.
    pub fn new(params: &CrossingParams) -> SimResult<Self> {
        let derived = params.derive()?;
        let sampler = AngleSampler::new(derived.max_deviation_deg, params.deviation_policy)?;
        log::debug!(
            "crossing start: {:.2} km at {:.2} km/day, hunting every {} days, {} days of ice",
            derived.initial_distance_km,
            derived.daily_distance_km,
            derived.hunt_every_days,
            derived.ice_duration_days
        );
        Ok(Self {
            derived,
            sampler,
            remaining_km: derived.initial_distance_km,
            day: 0,
            travel_days: 0,
            hunt_days: 0,
            rng_draws: 0,
            verbose: params.verbose,
            log: Vec::new(),
        })
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn remaining_km(&self) -> f64 {
        self.remaining_km
    }

    /// Random draws consumed so far.
    #[must_use]
    pub const fn rng_draws(&self) -> u64 {
        self.rng_draws
    }

    /// Whether more than one day's travel remains.
    #[must_use]
    pub fn is_underway(&self) -> bool {
        self.remaining_km > self.derived.daily_distance_km
    }

    /// Simulate the next full day. Returns `None` once the destination is
    /// within one day's travel.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DayLimitExceeded`] past [`MAX_SIMULATED_DAYS`], or
    /// [`SimError::NumericInvariant`] if the distance update breaks down.
    pub fn tick_day<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SimResult<Option<DayRecord>> {
        if !self.is_underway() {
            return Ok(None);
        }
        if self.day >= MAX_SIMULATED_DAYS {
            return Err(SimError::DayLimitExceeded {
                limit: MAX_SIMULATED_DAYS,
                remaining_km: self.remaining_km,
            });
        }

        self.day += 1;
        let event = if self.day % self.derived.hunt_every_days == 0 {
            self.hunt_days += 1;
            DayEvent::Hunt {
                remaining_km: self.remaining_km,
            }
        } else {
            let mut counted = CountingRng::wrap(&mut *rng);
            let angle_deg = self.sampler.sample(&mut counted);
            self.rng_draws += counted.draws();
            self.remaining_km =
                update_distance(self.derived.daily_distance_km, self.remaining_km, angle_deg)?;
            self.travel_days += 1;
            DayEvent::Travel {
                angle_deg,
                remaining_km: self.remaining_km,
            }
        };

        let record = DayRecord {
            day: self.day,
            event,
        };
        log::trace!("{record}");
        if self.verbose {
            self.log.push(record);
        }
        Ok(Some(record))
    }

    /// Close the crossing: count the final partial day and judge the outcome.
    #[must_use]
    pub fn finish(self) -> CrossingReport {
        let days = self.day + 1;
        let outcome = if days < self.derived.ice_duration_days {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        log::debug!(
            "crossing {outcome} after {days} days ({} travel, {} hunting, {} draws)",
            self.travel_days,
            self.hunt_days,
            self.rng_draws
        );
        CrossingReport {
            outcome,
            days,
            travel_days: self.travel_days,
            hunt_days: self.hunt_days,
            initial_distance_km: self.derived.initial_distance_km,
            daily_distance_km: self.derived.daily_distance_km,
            final_remaining_km: self.remaining_km,
            ice_duration_days: self.derived.ice_duration_days,
            hunt_every_days: self.derived.hunt_every_days,
            rng_draws: self.rng_draws,
            log: self.log,
        }
    }
}

/// Run one full crossing with the supplied random source.
///
/// # Errors
///
/// Returns a validation error for invalid inputs, or a simulation error when
/// the day cap is hit or the geometry step produces a non-finite distance.
pub fn simulate_crossing<R: Rng + ?Sized>(
    params: &CrossingParams,
    rng: &mut R,
) -> SimResult<CrossingReport> {
    let mut session = CrossingSession::new(params)?;
    while session.tick_day(rng)?.is_some() {}
    Ok(session.finish())
}
