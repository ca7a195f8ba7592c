//! Ego Curvature core pipeline and CLI.
//!
//! One-shot analysis over a single ego-motion recording: ingest Parquet,
//! derive the curvature feature, export the augmented table and comparison
//! chart, and report video cue points.

pub mod cli;
pub mod exit_codes;
pub mod pipeline;

pub use cli::{AnalyzeArgs, Cli, Commands, SynthArgs};
pub use exit_codes::ExitCode;
pub use pipeline::{run_analyze, run_synth};
