//! Ego Curvature configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the analysis config file
//! - Config resolution (CLI path → defaults)
//! - Semantic validation

pub mod model;
pub mod resolve;

pub use model::{AnalysisConfig, ConfigError, DeriveSettings, OutputSettings};
pub use resolve::load_or_default;

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
