//! Centralized tuning constants for the crossing simulation.
//!
//! Unit conversions, sentinels and guard rails live here so that the
//! simulation math can only change through reviewed code, not through
//! external configuration.

// Unit conversions ---------------------------------------------------------
/// Kilometres per nautical mile (one knot is one nautical mile per hour).
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

// Hunting ------------------------------------------------------------------
/// Effective hunting interval used when no calories are gathered.
pub const NO_HUNT_SENTINEL_DAYS: u32 = 365;
/// Base hunting interval before scaling by the gathered share.
pub const DEFAULT_HUNT_INTERVAL_DAYS: u32 = 5;
/// Smallest effective interval that still leaves travel days between hunts.
pub const MIN_EFFECTIVE_HUNT_INTERVAL_DAYS: u32 = 2;

// Deviation ----------------------------------------------------------------
/// Ratio between the maximum deviation and the sampler's standard deviation.
pub const DEVIATION_SIGMA_DIVISOR: f64 = 3.0;
/// Largest accepted deviation bound, a quarter turn off the direct heading.
pub const MAX_DEVIATION_LIMIT_DEG: f64 = 90.0;
/// Draws attempted by the resampling policy before it clamps.
pub const DEFAULT_RESAMPLE_ATTEMPTS: u32 = 16;

// Guards -------------------------------------------------------------------
/// Hard cap on simulated days for a single crossing.
pub const MAX_SIMULATED_DAYS: u32 = 100_000;
/// Upper bound on traveling hours per day.
pub const MAX_TRAVELING_HOURS: f64 = 24.0;
/// Upper bound on the gathered share of calories, in percent.
pub const MAX_GATHER_PCT: f64 = 100.0;

// Prototype defaults -------------------------------------------------------
/// Default distance to cover, in kilometres.
pub(crate) const DEFAULT_DISTANCE_KM: f64 = 4_500.0;
/// Default boat speed, in knots.
pub(crate) const DEFAULT_SPEED_KNOTS: f64 = 5.0;
/// Default traveling hours per day.
pub(crate) const DEFAULT_TRAVELING_HOURS: f64 = 8.0;
/// Default sea-ice duration, in days.
pub(crate) const DEFAULT_ICE_DURATION_DAYS: u32 = 360;

// RNG stream tags ----------------------------------------------------------
/// Domain tag for the daily deviation stream.
pub(crate) const STREAM_DEVIATION: &[u8] = b"deviation";
