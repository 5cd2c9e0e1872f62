mod reports;
mod seeds;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use reports::{Estimate, ReportFormat};
use seeds::{DEFAULT_SEED, resolve_seed_inputs, split_csv};
use solutrean_sim::constants::DEFAULT_RESAMPLE_ATTEMPTS;
use solutrean_sim::{
    CrossingParams, OutOfRangePolicy, SimRng, SliderConfig, daily_distance_km, distance_covered,
    naive_crossing_days, result_summary, run_batch, simulate_crossing,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeviationPolicy {
    /// Redraw out-of-range angles, clamping once attempts run out
    Resample,
    /// Clamp out-of-range angles immediately
    Clamp,
}

#[derive(Debug, Parser)]
#[command(name = "solutrean", version)]
#[command(about = "Simulate an open-water crossing that must finish before the sea ice gives out")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output report format
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a single seeded crossing
    Simulate {
        #[command(flatten)]
        params: ParamArgs,

        /// Seed for the deviation stream
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Record a per-day log
        #[arg(short, long)]
        verbose: bool,
    },
    /// Run many crossings and summarise the success rate
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Seeds to run (comma-separated, decimal or 0x-hex)
        #[arg(long, default_value = "1337")]
        seeds: String,

        /// Crossings per seed
        #[arg(long, default_value_t = 10)]
        iterations: u32,
    },
    /// Straight-line estimate without deviation or hunting
    Estimate {
        /// Distance to cover in km
        #[arg(long, default_value_t = 4_500.0)]
        distance: f64,

        /// Boat speed in knots
        #[arg(long, default_value_t = 5.0)]
        speed: f64,

        /// Hours traveled per day
        #[arg(long, default_value_t = 8.0)]
        hours: f64,

        /// Days of sea ice
        #[arg(long, default_value_t = 360)]
        ice_duration: u32,
    },
    /// Print the slider ranges offered to the front end
    Sliders,
}

#[derive(Debug, Clone, clap::Args)]
struct ParamArgs {
    /// Distance to cover in km
    #[arg(long, default_value_t = 4_500.0)]
    distance: f64,

    /// Boat speed in knots
    #[arg(long, default_value_t = 5.0)]
    speed: f64,

    /// Hours traveled per day
    #[arg(long, default_value_t = 8.0)]
    hours: f64,

    /// Days of sea ice
    #[arg(long, default_value_t = 360)]
    ice_duration: u32,

    /// Maximum deviation from the direct heading in degrees
    #[arg(long, default_value_t = 90.0)]
    max_deviation: f64,

    /// Base hunting interval in days
    #[arg(long, default_value_t = 5)]
    hunt_interval: u32,

    /// Percentage of calories gathered on the way
    #[arg(long, default_value_t = 0.0)]
    gather: f64,

    /// How out-of-range deviation draws are handled
    #[arg(long, value_enum, default_value_t = DeviationPolicy::Resample)]
    policy: DeviationPolicy,

    /// Redraw attempts for the resample policy
    #[arg(long, default_value_t = DEFAULT_RESAMPLE_ATTEMPTS)]
    resample_attempts: u32,
}

impl ParamArgs {
    fn to_params(&self, verbose: bool) -> CrossingParams {
        let deviation_policy = match self.policy {
            DeviationPolicy::Resample => OutOfRangePolicy::Resample {
                max_attempts: self.resample_attempts,
            },
            DeviationPolicy::Clamp => OutOfRangePolicy::Clamp,
        };
        CrossingParams {
            distance_km: self.distance,
            speed_knots: self.speed,
            traveling_hours: self.hours,
            ice_duration_days: self.ice_duration,
            max_deviation_deg: self.max_deviation,
            hunt_interval_days: self.hunt_interval,
            gather_pct: self.gather,
            verbose,
            deviation_policy,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut output_target = OutputTarget::new(args.output.clone())?;
    run(&args, &mut output_target)?;
    output_target.flush_inner()?;
    Ok(())
}

fn run(args: &Args, w: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Simulate {
            params,
            seed,
            verbose,
        } => {
            let params = params.to_params(*verbose);
            log::info!("simulating crossing with seed {seed}");
            let mut rng = SimRng::from_user_seed(*seed);
            let report = simulate_crossing(&params, &mut rng)
                .context("crossing parameters rejected")?;
            let summary = result_summary(&report);
            reports::write_simulation(w, args.report, *seed, &summary, &report)
        }
        Command::Sweep {
            params,
            seeds,
            iterations,
        } => {
            let params = params.to_params(false);
            let seed_list = resolve_seed_inputs(&split_csv(seeds))?;
            log::info!(
                "sweeping {} seeds x {iterations} iterations",
                seed_list.len()
            );
            let summary = run_batch(&params, &seed_list, *iterations)
                .context("crossing parameters rejected")?;
            reports::write_sweep(w, args.report, &summary)
        }
        Command::Estimate {
            distance,
            speed,
            hours,
            ice_duration,
        } => {
            let naive_days = naive_crossing_days(*distance, *speed, *hours)
                .context("estimate parameters rejected")?;
            let covered = distance_covered(*ice_duration, *speed, *hours)
                .context("estimate parameters rejected")?;
            let estimate = Estimate {
                distance_km: *distance,
                speed_knots: *speed,
                traveling_hours: *hours,
                ice_duration_days: *ice_duration,
                daily_distance_km: daily_distance_km(*speed, *hours),
                naive_days,
                distance_covered_km: covered,
                fits_in_ice_window: covered >= *distance,
            };
            reports::write_estimate(w, args.report, &estimate)
        }
        Command::Sliders => reports::write_sliders(w, args.report, &SliderConfig::default()),
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("solutrean").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    fn run_to_string(args: &Args) -> Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        run(args, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn simulate_defaults_match_prototype() {
        let args = parse(&["simulate"]);
        let Command::Simulate {
            params,
            seed,
            verbose,
        } = &args.command
        else {
            panic!("expected simulate");
        };
        assert_eq!(*seed, DEFAULT_SEED);
        assert!(!verbose);
        assert_eq!(params.to_params(false), CrossingParams::default());
        assert_eq!(args.report, ReportFormat::Console);
    }

    #[test]
    fn clamp_policy_maps_to_sampler_policy() {
        let args = parse(&["simulate", "--policy", "clamp", "--gather", "50"]);
        let Command::Simulate { params, .. } = &args.command else {
            panic!("expected simulate");
        };
        let params = params.to_params(true);
        assert_eq!(params.deviation_policy, OutOfRangePolicy::Clamp);
        assert!(params.verbose);
        assert!((params.gather_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn straight_simulation_reports_sixty_one_days() {
        let args = parse(&["simulate", "--max-deviation", "0", "--report", "json"]);
        let out = run_to_string(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["report"]["days"], 61);
        assert_eq!(value["summary"]["outcome"], "success");
    }

    #[test]
    fn invalid_speed_surfaces_context() {
        let args = parse(&["simulate", "--speed", "0"]);
        let err = run_to_string(&args).unwrap_err();
        assert!(format!("{err:#}").contains("speed_knots"));
    }

    #[test]
    fn sweep_json_counts_runs() {
        let args = parse(&[
            "sweep",
            "--seeds",
            "1,2",
            "--iterations",
            "3",
            "--report",
            "json",
        ]);
        let out = run_to_string(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["runs"], 6);
    }

    #[test]
    fn estimate_flags_short_ice_window() {
        let args = parse(&["estimate", "--ice-duration", "30", "--report", "json"]);
        let out = run_to_string(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["naive_days"], 61);
        assert_eq!(value["fits_in_ice_window"], false);
    }

    #[test]
    fn sliders_json_parses_back() {
        let args = parse(&["sliders", "--report", "json"]);
        let out = run_to_string(&args).unwrap();
        let parsed = SliderConfig::from_json(&out).unwrap();
        assert_eq!(parsed, SliderConfig::default());
    }
}
