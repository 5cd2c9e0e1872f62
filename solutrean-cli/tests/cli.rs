use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "solutrean-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_sliders_writes_output_file() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output_path = temp_path("sliders");
    let status = Command::new(exe)
        .args(["sliders", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available sliders"));
    assert!(content.contains("distance_km"));
}

#[test]
fn cli_simulate_verbose_markdown_lists_days() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output = Command::new(exe)
        .args([
            "simulate",
            "--distance",
            "500",
            "--max-deviation",
            "0",
            "--verbose",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Daily Log"));
    assert!(stdout.contains("Day 6: angle is 0.00°, new distance is 55.52 km"));
    assert!(stdout.contains("- **Elapsed days**: 7"));
}

#[test]
fn cli_rejects_out_of_range_gather() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output = Command::new(exe)
        .args(["simulate", "--gather", "150"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gather_pct"));
}

#[test]
fn cli_rejects_hunting_every_day() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output = Command::new(exe)
        .args(["simulate", "--hunt-interval", "1", "--gather", "100"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("leaves no travel days"));
    assert!(!stderr.contains("simulated days"));
}

#[test]
fn cli_sweep_csv_has_header_and_rows() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output = Command::new(exe)
        .args([
            "sweep",
            "--seeds",
            "7,8",
            "--iterations",
            "2",
            "--report",
            "csv",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("seed,iteration,outcome,days,hunt_days"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn cli_unknown_seed_token_fails() {
    let exe = env!("CARGO_BIN_EXE_solutrean");
    let output = Command::new(exe)
        .args(["sweep", "--seeds", "not-a-seed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unrecognized seed token"));
}
