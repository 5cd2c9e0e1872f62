//! Slider ranges offered by the interactive front end.
//!
//! The simulation never reads these; they describe which values a GUI lets
//! the user pick and are handed to it as an immutable table.
use serde::{Deserialize, Serialize};

/// Inclusive range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(default)]
    pub default: Option<f64>,
}

impl SliderRange {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            default: None,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, value: f64) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Every selectable value, from `min` to `max`.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if !(self.step > 0.0) || self.max < self.min {
            return vec![self.min];
        }
        let mut values = Vec::new();
        let mut index: f64 = 0.0;
        loop {
            let value = self.min + index * self.step;
            if value > self.max + self.step * 1e-9 {
                break;
            }
            values.push(value.min(self.max));
            index += 1.0;
        }
        values
    }
}

/// Immutable slider table for the crossing front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub distance_km: SliderRange,
    pub speed_knots: SliderRange,
    pub ice_duration_days: SliderRange,
    pub traveling_hours: SliderRange,
    pub gather_pct: SliderRange,
    pub max_deviation_deg: SliderRange,
    pub hunt_interval_days: SliderRange,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            distance_km: SliderRange::new(500.0, 4_500.0, 500.0),
            speed_knots: SliderRange::new(0.5, 10.0, 0.5),
            ice_duration_days: SliderRange::new(30.0, 360.0, 30.0),
            traveling_hours: SliderRange::new(1.0, 24.0, 1.0),
            gather_pct: SliderRange::new(0.0, 100.0, 10.0).with_default(50.0),
            max_deviation_deg: SliderRange::new(0.0, 90.0, 5.0),
            hunt_interval_days: SliderRange::new(1.0, 30.0, 1.0).with_default(5.0),
        }
    }
}

impl SliderConfig {
    /// Parse a slider table from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the JSON does not describe a slider table.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Named view over every slider, in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &SliderRange); 7] {
        [
            ("distance_km", &self.distance_km),
            ("speed_knots", &self.speed_knots),
            ("ice_duration_days", &self.ice_duration_days),
            ("traveling_hours", &self.traveling_hours),
            ("gather_pct", &self.gather_pct),
            ("max_deviation_deg", &self.max_deviation_deg),
            ("hunt_interval_days", &self.hunt_interval_days),
        ]
    }
}
