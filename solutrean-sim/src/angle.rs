//! Daily heading deviation sampling.
//!
//! Deviations follow a normal distribution centred on the direct heading with
//! a standard deviation of one third of the configured bound. Draws outside
//! the bound are handled by an explicit [`OutOfRangePolicy`] so sampling
//! always terminates.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RESAMPLE_ATTEMPTS, DEVIATION_SIGMA_DIVISOR, MAX_DEVIATION_LIMIT_DEG};
use crate::error::{SimError, SimResult, ensure_within};

/// What to do with a draw that falls outside `[-max, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OutOfRangePolicy {
    /// Redraw up to `max_attempts` times, clamping the final draw if all miss.
    Resample { max_attempts: u32 },
    /// Clamp the first draw into range.
    Clamp,
}

impl Default for OutOfRangePolicy {
    fn default() -> Self {
        Self::Resample {
            max_attempts: DEFAULT_RESAMPLE_ATTEMPTS,
        }
    }
}

/// Bounded, approximately normal deviation sampler.
#[derive(Debug, Clone)]
pub struct AngleSampler {
    max_deviation: f64,
    normal: Option<Normal<f64>>,
    policy: OutOfRangePolicy,
}

impl AngleSampler {
    /// Build a sampler for deviations bounded by `max_deviation` degrees.
    ///
    /// A bound of zero produces a sampler that always returns `0.0` without
    /// touching the random source.
    ///
    /// # Errors
    ///
    /// Returns an error when the bound lies outside `[0, 90]` or is not finite.
    pub fn new(max_deviation: f64, policy: OutOfRangePolicy) -> SimResult<Self> {
        ensure_within("max_deviation", 0.0, MAX_DEVIATION_LIMIT_DEG, max_deviation)?;
        let normal = if max_deviation > 0.0 {
            let std_dev = max_deviation / DEVIATION_SIGMA_DIVISOR;
            Some(Normal::new(0.0, std_dev).map_err(|_| SimError::InvalidDistribution { std_dev })?)
        } else {
            None
        };
        Ok(Self {
            max_deviation,
            normal,
            policy,
        })
    }

    /// Draw one deviation angle in degrees, within `[-max, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let Some(normal) = self.normal.as_ref() else {
            return 0.0;
        };
        let bound = self.max_deviation;
        let attempts = match self.policy {
            OutOfRangePolicy::Resample { max_attempts } => max_attempts.max(1),
            OutOfRangePolicy::Clamp => 1,
        };

        let mut draw = normal.sample(rng);
        for _ in 1..attempts {
            if draw.abs() <= bound {
                return draw;
            }
            draw = normal.sample(rng);
        }
        if draw.abs() > bound && matches!(self.policy, OutOfRangePolicy::Resample { .. }) {
            log::warn!(
                "deviation resampling exhausted {attempts} attempts; clamping {draw:.2} to ±{bound:.2}"
            );
        }
        draw.clamp(-bound, bound)
    }
}

/// Draw a single deviation angle bounded by `max_deviation` degrees using the
/// default resampling policy.
///
/// # Errors
///
/// Returns an error when the bound lies outside `[0, 90]` or is not finite.
pub fn sample_angle<R: Rng + ?Sized>(rng: &mut R, max_deviation: f64) -> SimResult<f64> {
    let sampler = AngleSampler::new(max_deviation, OutOfRangePolicy::default())?;
    Ok(sampler.sample(rng))
}
