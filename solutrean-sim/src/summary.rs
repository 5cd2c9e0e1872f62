//! Result message for a finished crossing
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crossing::{CrossingReport, Outcome};

/// Summary of one crossing as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingSummary {
    pub outcome: Outcome,
    pub headline: String,
    pub distance_km: f64,
    pub days: u32,
    pub ice_duration_days: u32,
    /// Per-day log lines; empty for quiet runs.
    pub log: Vec<String>,
}

impl From<&CrossingReport> for CrossingSummary {
    fn from(report: &CrossingReport) -> Self {
        Self {
            outcome: report.outcome,
            headline: headline(report),
            distance_km: report.initial_distance_km,
            days: report.days,
            ice_duration_days: report.ice_duration_days,
            log: report.log_lines(),
        }
    }
}

fn headline(report: &CrossingReport) -> String {
    match report.outcome {
        Outcome::Success => format!(
            "Success! Crossing {:.0} km took {} days, inside the {} days of sea ice.",
            report.initial_distance_km, report.days, report.ice_duration_days
        ),
        Outcome::Failure => format!(
            "Failure. Crossing {:.0} km took {} days, but the sea ice only lasted {} days.",
            report.initial_distance_km, report.days, report.ice_duration_days
        ),
    }
}

impl fmt::Display for CrossingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline)?;
        for line in &self.log {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Render the textual result of a crossing.
#[must_use]
pub fn result_summary(report: &CrossingReport) -> CrossingSummary {
    CrossingSummary::from(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::simulate_crossing;
    use crate::params::CrossingParams;
    use crate::rng::SimRng;

    #[test]
    fn success_message_mentions_distance_days_and_budget() {
        let params = CrossingParams {
            max_deviation_deg: 0.0,
            ..CrossingParams::default()
        };
        let report = simulate_crossing(&params, &mut SimRng::from_user_seed(1)).unwrap();
        let summary = result_summary(&report);
        assert_eq!(
            summary.to_string(),
            "Success! Crossing 4500 km took 61 days, inside the 360 days of sea ice."
        );
    }

    #[test]
    fn failure_message_includes_log_lines() {
        let params = CrossingParams {
            distance_km: 500.0,
            ice_duration_days: 3,
            max_deviation_deg: 0.0,
            verbose: true,
            ..CrossingParams::default()
        };
        let report = simulate_crossing(&params, &mut SimRng::from_user_seed(1)).unwrap();
        let summary = CrossingSummary::from(&report);
        assert_eq!(summary.outcome, Outcome::Failure);
        let text = summary.to_string();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Failure. Crossing 500 km took 7 days, but the sea ice only lasted 3 days.")
        );
        assert_eq!(
            lines.next(),
            Some("Day 1: angle is 0.00°, new distance is 425.92 km")
        );
        assert_eq!(text.lines().count(), 7);
    }
}
