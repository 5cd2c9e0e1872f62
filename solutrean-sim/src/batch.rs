//! Monte-Carlo sweeps over many seeded crossings.

use serde::{Deserialize, Serialize};

use crate::crossing::{Outcome, simulate_crossing};
use crate::error::SimResult;
use crate::numbers::usize_to_f64;
use crate::params::CrossingParams;
use crate::rng::SimRng;

/// One crossing inside a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchRun {
    pub seed: u64,
    pub iteration: u32,
    pub outcome: Outcome,
    pub days: u32,
    pub hunt_days: u32,
}

/// Aggregate over every run of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub params: CrossingParams,
    pub runs: usize,
    pub successes: usize,
    pub success_rate: f64,
    pub mean_days: f64,
    pub std_days: f64,
    pub min_days: u32,
    pub max_days: u32,
    pub records: Vec<BatchRun>,
}

/// Run `iterations` crossings for every seed. Each run draws from its own
/// stream derived from the seed and iteration index; per-day logging is
/// disabled regardless of `params.verbose`.
///
/// # Errors
///
/// Returns the first validation or simulation error encountered.
pub fn run_batch(params: &CrossingParams, seeds: &[u64], iterations: u32) -> SimResult<BatchSummary> {
    let quiet = CrossingParams {
        verbose: false,
        ..params.clone()
    };
    quiet.validate()?;

    let mut stats = RunningStats::default();
    let mut records = Vec::with_capacity(seeds.len() * iterations as usize);
    for &seed in seeds {
        for iteration in 0..iterations {
            let mut rng = SimRng::for_iteration(seed, iteration);
            let report = simulate_crossing(&quiet, &mut rng)?;
            stats.add(report.days);
            records.push(BatchRun {
                seed,
                iteration,
                outcome: report.outcome,
                days: report.days,
                hunt_days: report.hunt_days,
            });
        }
    }

    let successes = records
        .iter()
        .filter(|run| run.outcome == Outcome::Success)
        .count();
    let runs = records.len();
    log::debug!(
        "sweep finished: {successes}/{runs} crossings succeeded over {} seeds",
        seeds.len()
    );
    Ok(BatchSummary {
        params: quiet,
        runs,
        successes,
        success_rate: if runs == 0 {
            0.0
        } else {
            usize_to_f64(successes) / usize_to_f64(runs)
        },
        mean_days: stats.mean(),
        std_days: stats.std_dev(),
        min_days: stats.min.unwrap_or(0),
        max_days: stats.max.unwrap_or(0),
        records,
    })
}

#[derive(Debug, Default, Clone)]
struct RunningStats {
    count: u32,
    mean: f64,
    m2: f64,
    min: Option<u32>,
    max: Option<u32>,
}

impl RunningStats {
    fn add(&mut self, days: u32) {
        self.count += 1;
        let value = f64::from(days);
        let count = f64::from(self.count);
        let delta = value - self.mean;
        self.mean += delta / count;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
        self.min = Some(self.min.map_or(days, |m| m.min(days)));
        self.max = Some(self.max.map_or(days, |m| m.max(days)));
    }

    const fn mean(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.mean }
    }

    fn variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / f64::from(self.count - 1)
        } else {
            0.0
        }
    }

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
