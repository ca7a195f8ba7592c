//! The one-shot analysis pipeline.
//!
//! Linear flow: resolve config → ingest Parquet → derive → cue points →
//! export CSV → render chart → summary. All computation happens before any
//! output file is created, so a failing run leaves no partial artifacts.

use crate::cli::{AnalyzeArgs, SynthArgs};
use ec_common::{Error, RecordingId, Result, RunId};
use ec_config::AnalysisConfig;
use ec_kinematics::{derive_curvature, DeriveParams};
use ec_report::{compute_cue_points, save_chart, ChartOptions, SummaryReport};
use ec_telemetry::{read_egomotion, synthesize_arc, write_augmented_csv, write_egomotion};
use std::path::Path;
use tracing::{info, warn};

/// Run the full analysis for one recording.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<SummaryReport> {
    let config = resolve_config(args)?;

    let samples = read_egomotion(&args.recording)?;

    let params = DeriveParams {
        speed_epsilon: config.derive.speed_epsilon,
        first_delta_t_secs: config.derive.first_delta_t_secs,
    };
    let rows = derive_curvature(samples, &params).map_err(|e| Error::Derive(e.to_string()))?;
    info!(rows = rows.len(), "curvature feature derived");

    let recording = RecordingId::from_input_path(&args.recording);
    let cue = compute_cue_points(&rows, &config.cue_window, &recording, config.camera_view)?;

    std::fs::create_dir_all(&args.out_dir)?;
    let table_path = args.out_dir.join(&config.output.table_csv);
    let chart_path = args.out_dir.join(&config.output.chart_svg);

    write_augmented_csv(&table_path, &rows)?;

    let options = ChartOptions {
        title: format!("Roadway Curvature Profile ({})", recording),
        ..ChartOptions::default()
    };
    save_chart(&chart_path, &rows, &options)?;

    if args.open {
        open_in_viewer(&chart_path);
    }

    Ok(SummaryReport::new(
        RunId::new(),
        recording,
        &rows,
        table_path.display().to_string(),
        chart_path.display().to_string(),
        cue,
    ))
}

/// Write a synthetic arc recording.
pub fn run_synth(args: &SynthArgs) -> Result<()> {
    let samples = synthesize_arc(args.rows, args.speed, args.yaw_rate);
    write_egomotion(&args.output, &samples)?;
    info!(
        rows = args.rows,
        path = %args.output.display(),
        "synthetic recording written"
    );
    Ok(())
}

/// Load the config file (or defaults) and fold in the CLI overrides.
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = ec_config::load_or_default(args.config.as_deref())?;

    if let Some(start) = args.window_start {
        config.cue_window.start_index = start;
    }
    if let Some(end) = args.window_end {
        config.cue_window.end_index = end;
    }
    if let Some(view) = args.camera_view {
        config.camera_view = view;
    }

    // Overrides can invalidate a config that was fine on disk.
    config.validate().map_err(ec_common::Error::from)?;
    Ok(config)
}

#[cfg(target_os = "macos")]
const VIEWER: &str = "open";
#[cfg(target_os = "windows")]
const VIEWER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const VIEWER: &str = "xdg-open";

/// Best-effort launch of the platform viewer on the saved chart.
fn open_in_viewer(path: &Path) {
    match std::process::Command::new(VIEWER).arg(path).spawn() {
        Ok(_) => info!(path = %path.display(), "chart opened in viewer"),
        Err(e) => warn!(path = %path.display(), "could not open viewer: {e}"),
    }
}
