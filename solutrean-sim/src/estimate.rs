//! Closed-form estimates that ignore deviation and hunting.

use crate::constants::{KM_PER_NAUTICAL_MILE, MAX_TRAVELING_HOURS};
use crate::error::{SimResult, ensure_above, ensure_within};
use crate::numbers::round_f64_to_u32;

/// Days needed to cover `distance_km` in a straight line, rounded to the
/// nearest whole day.
///
/// # Errors
///
/// Returns a validation error for non-positive distance, speed or hours.
pub fn naive_crossing_days(distance_km: f64, speed_knots: f64, traveling_hours: f64) -> SimResult<u32> {
    ensure_above("distance_km", 0.0, distance_km)?;
    ensure_above("speed_knots", 0.0, speed_knots)?;
    ensure_above("traveling_hours", 0.0, traveling_hours)?;
    ensure_within("traveling_hours", 0.0, MAX_TRAVELING_HOURS, traveling_hours)?;

    let speed_kmh = speed_knots * KM_PER_NAUTICAL_MILE;
    let hours = distance_km / speed_kmh;
    Ok(round_f64_to_u32(hours / traveling_hours))
}

/// Kilometres covered over `duration_days` at `speed_knots` for
/// `traveling_hours` a day.
///
/// # Errors
///
/// Returns a validation error for non-positive speed or hours.
pub fn distance_covered(duration_days: u32, speed_knots: f64, traveling_hours: f64) -> SimResult<f64> {
    ensure_above("speed_knots", 0.0, speed_knots)?;
    ensure_above("traveling_hours", 0.0, traveling_hours)?;
    ensure_within("traveling_hours", 0.0, MAX_TRAVELING_HOURS, traveling_hours)?;
    Ok(traveling_hours * f64::from(duration_days) * (speed_knots * KM_PER_NAUTICAL_MILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn naive_days_round_to_nearest() {
        // 4500 / 74.08 = 60.75
        assert_eq!(naive_crossing_days(4_500.0, 5.0, 8.0).unwrap(), 61);
        assert_eq!(naive_crossing_days(4_500.0, 0.5, 1.0).unwrap(), 4_860);
        assert_eq!(naive_crossing_days(500.0, 10.0, 24.0).unwrap(), 1);
    }

    #[test]
    fn distance_covered_scales_linearly() {
        let one = distance_covered(1, 5.0, 8.0).unwrap();
        assert!((one - 74.08).abs() < 1e-9);
        let season = distance_covered(360, 5.0, 8.0).unwrap();
        assert!((season - 26_668.8).abs() < 1e-6);
        assert!(distance_covered(0, 5.0, 8.0).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn estimates_validate_inputs() {
        assert!(matches!(
            naive_crossing_days(4_500.0, 0.0, 8.0),
            Err(SimError::MinViolation {
                field: "speed_knots",
                ..
            })
        ));
        assert!(distance_covered(30, 5.0, 0.0).is_err());
        assert!(naive_crossing_days(-1.0, 5.0, 8.0).is_err());
    }
}
