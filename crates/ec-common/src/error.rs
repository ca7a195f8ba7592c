//! Error types for Ego Curvature.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ego Curvature operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Ego Curvature.
///
/// Crate-local errors (`TelemetryError`, `KinematicsError`, `ReportError`,
/// `ConfigError`) convert into this type at the pipeline boundary.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("config schema version mismatch: expected major of {expected}, got {actual}")]
    SchemaMismatch { expected: String, actual: String },

    // Ingest errors (20-29)
    #[error("input recording not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("recording ingest failed: {0}")]
    Ingest(String),

    // Derivation errors (30-39)
    #[error("curvature derivation failed: {0}")]
    Derive(String),

    // Report errors (40-49)
    #[error("cue window {window} out of range for {rows} rows; row indices are 0-based positions after the timestamp sort")]
    CueWindow { window: String, rows: usize },

    #[error("report rendering failed: {0}")]
    Render(String),

    // Export errors (50-59)
    #[error("table export failed: {0}")]
    Export(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used for exit code mapping and detailed error reporting.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::SchemaMismatch { .. } => 11,
            Error::MissingInput { .. } => 20,
            Error::Ingest(_) => 21,
            Error::Derive(_) => 30,
            Error::CueWindow { .. } => 40,
            Error::Render(_) => 41,
            Error::Export(_) => 50,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
