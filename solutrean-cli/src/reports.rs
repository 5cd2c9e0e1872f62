use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use solutrean_sim::{
    BatchSummary, CrossingReport, CrossingSummary, DayEvent, Outcome, SliderConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored output
    Console,
    Json,
    Markdown,
    Csv,
}

/// Straight-line estimate for the `estimate` command.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub distance_km: f64,
    pub speed_knots: f64,
    pub traveling_hours: f64,
    pub ice_duration_days: u32,
    pub daily_distance_km: f64,
    pub naive_days: u32,
    pub distance_covered_km: f64,
    pub fits_in_ice_window: bool,
}

#[derive(Serialize)]
struct SimulationJson<'a> {
    seed: u64,
    summary: &'a CrossingSummary,
    report: &'a CrossingReport,
}

fn outcome_label(outcome: Outcome) -> colored::ColoredString {
    match outcome {
        Outcome::Success => "✅ SUCCESS".green().bold(),
        Outcome::Failure => "❌ FAILURE".red().bold(),
    }
}

pub fn write_simulation(
    w: &mut dyn Write,
    format: ReportFormat,
    seed: u64,
    summary: &CrossingSummary,
    report: &CrossingReport,
) -> Result<()> {
    match format {
        ReportFormat::Json => {
            let payload = SimulationJson {
                seed,
                summary,
                report,
            };
            writeln!(w, "{}", serde_json::to_string_pretty(&payload)?)?;
        }
        ReportFormat::Markdown => {
            writeln!(w, "# Crossing Result\n")?;
            writeln!(w, "- **Outcome**: {}", summary.outcome)?;
            writeln!(w, "- **Seed**: {seed}")?;
            writeln!(w, "- **Distance**: {:.0} km", summary.distance_km)?;
            writeln!(w, "- **Daily distance**: {:.2} km", report.daily_distance_km)?;
            writeln!(w, "- **Elapsed days**: {}", summary.days)?;
            writeln!(w, "- **Hunting days**: {}", report.hunt_days)?;
            writeln!(w, "- **Random draws**: {}", report.rng_draws)?;
            writeln!(w, "- **Sea ice**: {} days\n", summary.ice_duration_days)?;
            writeln!(w, "{}", summary.headline)?;
            if !summary.log.is_empty() {
                writeln!(w, "\n## Daily Log\n")?;
                for line in &summary.log {
                    writeln!(w, "- {line}")?;
                }
            }
        }
        ReportFormat::Csv => {
            writeln!(w, "day,event,angle_deg,remaining_km")?;
            for record in &report.log {
                match record.event {
                    DayEvent::Hunt { remaining_km } => {
                        writeln!(w, "{},hunt,,{remaining_km:.4}", record.day)?;
                    }
                    DayEvent::Travel {
                        angle_deg,
                        remaining_km,
                    } => {
                        writeln!(w, "{},travel,{angle_deg:.4},{remaining_km:.4}", record.day)?;
                    }
                }
            }
        }
        ReportFormat::Console => {
            writeln!(w, "{}", "🧭 Crossing Result".bright_cyan().bold())?;
            writeln!(w, "{}", "==================".cyan())?;
            writeln!(w, "{} (seed {seed})", outcome_label(summary.outcome))?;
            writeln!(w, "{}", summary.headline)?;
            writeln!(
                w,
                "Daily distance: {:.2} km, hunting every {} days ({} hunting days)",
                report.daily_distance_km, report.hunt_every_days, report.hunt_days
            )?;
            writeln!(w, "Random draws: {}", report.rng_draws)?;
            if !summary.log.is_empty() {
                writeln!(w)?;
                for line in &summary.log {
                    writeln!(w, "  {line}")?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_sweep(w: &mut dyn Write, format: ReportFormat, summary: &BatchSummary) -> Result<()> {
    let success_pct = summary.success_rate * 100.0;
    match format {
        ReportFormat::Json => {
            writeln!(w, "{}", serde_json::to_string_pretty(summary)?)?;
        }
        ReportFormat::Markdown => {
            writeln!(w, "# Crossing Sweep Results\n")?;
            writeln!(w, "## Summary\n")?;
            writeln!(w, "- **Runs**: {}", summary.runs)?;
            writeln!(w, "- **Successes**: {}", summary.successes)?;
            writeln!(w, "- **Success rate**: {success_pct:.1}%")?;
            writeln!(
                w,
                "- **Days**: mean {:.1}, std {:.1}, min {}, max {}",
                summary.mean_days, summary.std_days, summary.min_days, summary.max_days
            )?;
        }
        ReportFormat::Csv => {
            writeln!(w, "seed,iteration,outcome,days,hunt_days")?;
            for run in &summary.records {
                writeln!(
                    w,
                    "{},{},{},{},{}",
                    run.seed, run.iteration, run.outcome, run.days, run.hunt_days
                )?;
            }
        }
        ReportFormat::Console => {
            writeln!(w, "{}", "📊 Crossing Sweep Summary".bright_cyan().bold())?;
            writeln!(w, "{}", "========================".cyan())?;
            writeln!(w, "Runs: {}", summary.runs)?;
            writeln!(w, "Successes: {}", summary.successes.to_string().green())?;
            writeln!(
                w,
                "Failures: {}",
                (summary.runs - summary.successes).to_string().red()
            )?;
            writeln!(w, "Success rate: {success_pct:.1}%")?;
            writeln!(
                w,
                "Days: mean {:.1} ± {:.1} (min {}, max {})",
                summary.mean_days, summary.std_days, summary.min_days, summary.max_days
            )?;
        }
    }
    Ok(())
}

pub fn write_estimate(w: &mut dyn Write, format: ReportFormat, estimate: &Estimate) -> Result<()> {
    match format {
        ReportFormat::Json => {
            writeln!(w, "{}", serde_json::to_string_pretty(estimate)?)?;
        }
        ReportFormat::Markdown => {
            writeln!(w, "# Naive Crossing Estimate\n")?;
            writeln!(w, "- **Daily distance**: {:.2} km", estimate.daily_distance_km)?;
            writeln!(w, "- **Straight-line days**: {}", estimate.naive_days)?;
            writeln!(
                w,
                "- **Covered in {} days**: {:.1} km",
                estimate.ice_duration_days, estimate.distance_covered_km
            )?;
        }
        ReportFormat::Csv => {
            writeln!(
                w,
                "distance_km,speed_knots,traveling_hours,ice_duration_days,naive_days,distance_covered_km"
            )?;
            writeln!(
                w,
                "{},{},{},{},{},{:.4}",
                estimate.distance_km,
                estimate.speed_knots,
                estimate.traveling_hours,
                estimate.ice_duration_days,
                estimate.naive_days,
                estimate.distance_covered_km
            )?;
        }
        ReportFormat::Console => {
            writeln!(w, "{}", "📐 Naive Crossing Estimate".bright_cyan().bold())?;
            writeln!(w, "Daily distance: {:.2} km", estimate.daily_distance_km)?;
            writeln!(w, "Straight-line crossing: {} days", estimate.naive_days)?;
            writeln!(
                w,
                "Distance covered in {} days of ice: {:.1} km",
                estimate.ice_duration_days, estimate.distance_covered_km
            )?;
            let verdict = if estimate.fits_in_ice_window {
                "fits inside the ice window".green()
            } else {
                "does not fit inside the ice window".red()
            };
            writeln!(w, "Verdict: {verdict}")?;
        }
    }
    Ok(())
}

pub fn write_sliders(w: &mut dyn Write, format: ReportFormat, sliders: &SliderConfig) -> Result<()> {
    match format {
        ReportFormat::Console => {
            writeln!(w, "Available sliders:")?;
            for (name, range) in sliders.entries() {
                writeln!(
                    w,
                    "  {name:20} {:>8} .. {:<8} step {}",
                    range.min, range.max, range.step
                )?;
            }
        }
        ReportFormat::Markdown => {
            writeln!(w, "| Slider | Min | Max | Step |")?;
            writeln!(w, "|---|---|---|---|")?;
            for (name, range) in sliders.entries() {
                writeln!(w, "| {name} | {} | {} | {} |", range.min, range.max, range.step)?;
            }
        }
        ReportFormat::Csv => {
            writeln!(w, "slider,min,max,step")?;
            for (name, range) in sliders.entries() {
                writeln!(w, "{name},{},{},{}", range.min, range.max, range.step)?;
            }
        }
        ReportFormat::Json => {
            writeln!(w, "{}", serde_json::to_string_pretty(sliders)?)?;
        }
    }
    Ok(())
}
