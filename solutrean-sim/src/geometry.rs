//! Triangle geometry behind the daily distance update.

use crate::error::{SimError, SimResult};

/// Distance to the destination after one day of travel.
///
/// The traveler's start point, the destination and the point reached after
/// covering `daily_km` form a triangle whose sides `daily_km` and
/// `remaining_km` meet at `angle_deg`; the law of cosines gives the third
/// side. The sign of the angle is irrelevant.
///
/// # Errors
///
/// Returns [`SimError::NumericInvariant`] if either side is negative or
/// non-finite, or if the result is not a finite number.
pub fn update_distance(daily_km: f64, remaining_km: f64, angle_deg: f64) -> SimResult<f64> {
    let invariant = || SimError::NumericInvariant {
        daily_km,
        remaining_km,
        angle_deg,
    };
    if !(daily_km >= 0.0 && remaining_km >= 0.0 && daily_km.is_finite() && remaining_km.is_finite())
    {
        return Err(invariant());
    }

    let theta = angle_deg.to_radians();
    let squared = daily_km * daily_km + remaining_km * remaining_km
        - 2.0 * daily_km * remaining_km * theta.cos();
    if !squared.is_finite() {
        return Err(invariant());
    }
    // a² + b² − 2ab·cos θ ≥ (a − b)² ≥ 0; only rounding can push it below zero.
    Ok(squared.max(0.0).sqrt())
}

/// Chord length subtended by `angle_deg` on the unit circle: `2·sin(θ/2)`.
#[must_use]
pub fn chord_length(angle_deg: f64) -> f64 {
    2.0 * (angle_deg.to_radians() / 2.0).sin()
}
