//! CLI definitions for ec-core.

use clap::{Args, Parser, Subcommand};
use ec_common::{CameraView, OutputFormat};
use std::path::PathBuf;

/// Derive roadway curvature from a vehicle ego-motion recording.
#[derive(Parser, Debug)]
#[command(name = "ec-core", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one recording: derive curvature, export table + chart,
    /// report video cue points
    Analyze(AnalyzeArgs),
    /// Write a synthetic constant-speed arc recording (fixtures, demos)
    Synth(SynthArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the ego-motion Parquet file (e.g. <uuid>.egomotion.parquet)
    pub recording: PathBuf,

    /// Optional analysis config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the outputs are written into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Override the cue window start row (0-based, after sorting)
    #[arg(long)]
    pub window_start: Option<usize>,

    /// Override the cue window end row (0-based, inclusive)
    #[arg(long)]
    pub window_end: Option<usize>,

    /// Camera view used for the companion video filename
    #[arg(long, value_enum)]
    pub camera_view: Option<CameraView>,

    /// Summary format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Open the saved chart in the system viewer
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the synth command
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Output Parquet path
    pub output: PathBuf,

    /// Number of samples (10 Hz spacing)
    #[arg(long, default_value_t = 2000)]
    pub rows: usize,

    /// Vehicle speed, m/s
    #[arg(long, default_value_t = 8.0)]
    pub speed: f64,

    /// Constant yaw rate, rad/s
    #[arg(long, default_value_t = 0.05)]
    pub yaw_rate: f64,
}
