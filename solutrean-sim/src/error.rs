//! Error taxonomy for parameter validation and simulation invariants.

use thiserror::Error;

/// Errors raised when crossing inputs or simulation invariants are violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("{field} must be greater than {min:.2} (got {value:.2})")]
    MinViolation {
        field: &'static str,
        min: f64,
        value: f64,
    },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("daily distance resolves to {daily_km:.4} km; the crossing can never progress")]
    DegenerateDailyDistance { daily_km: f64 },
    #[error("hunting every {hunt_every_days} day(s) leaves no travel days; lower gather_pct or raise hunt_interval_days")]
    NoTravelDays { hunt_every_days: u32 },
    #[error("deviation distribution rejected standard deviation {std_dev}")]
    InvalidDistribution { std_dev: f64 },
    #[error("law of cosines produced a non-finite distance from a={daily_km}, b={remaining_km}, theta={angle_deg}")]
    NumericInvariant {
        daily_km: f64,
        remaining_km: f64,
        angle_deg: f64,
    },
    #[error("crossing exceeded {limit} simulated days with {remaining_km:.2} km remaining")]
    DayLimitExceeded { limit: u32, remaining_km: f64 },
}

pub type SimResult<T> = Result<T, SimError>;

/// Reject NaN and infinities for a named input.
///
/// # Errors
///
/// Returns [`SimError::NotFinite`] when `value` is NaN or infinite.
pub fn ensure_finite(field: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NotFinite { field, value })
    }
}

/// Require `value > min`.
///
/// # Errors
///
/// Returns [`SimError::NotFinite`] or [`SimError::MinViolation`].
pub fn ensure_above(field: &'static str, min: f64, value: f64) -> SimResult<f64> {
    ensure_finite(field, value)?;
    if value > min {
        Ok(value)
    } else {
        Err(SimError::MinViolation { field, min, value })
    }
}

/// Require `min <= value <= max`.
///
/// # Errors
///
/// Returns [`SimError::NotFinite`] or [`SimError::RangeViolation`].
pub fn ensure_within(field: &'static str, min: f64, max: f64, value: f64) -> SimResult<f64> {
    ensure_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::RangeViolation {
            field,
            min,
            max,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_guard_rejects_nan_and_infinity() {
        assert!(ensure_finite("x", 1.0).is_ok());
        assert_eq!(
            ensure_finite("x", f64::INFINITY),
            Err(SimError::NotFinite {
                field: "x",
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            ensure_finite("x", f64::NAN),
            Err(SimError::NotFinite { field: "x", .. })
        ));
    }

    #[test]
    fn above_guard_is_strict() {
        assert!(ensure_above("speed", 0.0, 0.5).is_ok());
        assert!(matches!(
            ensure_above("speed", 0.0, 0.0),
            Err(SimError::MinViolation { field: "speed", .. })
        ));
    }

    #[test]
    fn within_guard_is_inclusive() {
        assert!(ensure_within("pct", 0.0, 100.0, 0.0).is_ok());
        assert!(ensure_within("pct", 0.0, 100.0, 100.0).is_ok());
        let err = ensure_within("pct", 0.0, 100.0, 100.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "pct must be between 0.00 and 100.00 (got 100.50)"
        );
    }
}
