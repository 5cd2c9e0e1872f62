//! Solutrean Crossing Engine
//!
//! Platform-agnostic simulation of an open-water crossing that has to finish
//! before the sea ice gives out. Each day the traveler covers a fixed distance
//! along a randomly deviating heading (or stops to hunt), and the remaining
//! distance is recomputed with the law of cosines. This crate carries no UI,
//! I/O or global state; every run receives its own random source.

pub mod angle;
pub mod batch;
pub mod constants;
pub mod crossing;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod numbers;
pub mod params;
pub mod rng;
pub mod sliders;
pub mod summary;

// Re-export commonly used types
pub use angle::{AngleSampler, OutOfRangePolicy, sample_angle};
pub use batch::{BatchRun, BatchSummary, run_batch};
pub use crossing::{
    CrossingReport, CrossingSession, DayEvent, DayRecord, Outcome, simulate_crossing,
};
pub use error::{SimError, SimResult};
pub use estimate::{distance_covered, naive_crossing_days};
pub use geometry::{chord_length, update_distance};
pub use params::{CrossingParams, DerivedParams, daily_distance_km, effective_hunt_interval};
pub use rng::{CountingRng, SimRng};
pub use sliders::{SliderConfig, SliderRange};
pub use summary::{CrossingSummary, result_summary};

/// Run one crossing from a user-visible seed and render its summary.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the simulation breaks an
/// invariant.
pub fn run_seeded(params: &CrossingParams, seed: u64) -> SimResult<CrossingSummary> {
    let mut rng = SimRng::from_user_seed(seed);
    let report = simulate_crossing(params, &mut rng)?;
    Ok(result_summary(&report))
}
