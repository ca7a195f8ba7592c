//! Error types for recording storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing recordings.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Input file does not exist
    #[error("input recording not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Required column absent from the file
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    /// Column present but with an unsupported Arrow type
    #[error("column '{column}' has unsupported type {actual}; expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: String,
    },

    /// Column contains nulls where finite numbers are required
    #[error("column '{column}' contains null values")]
    NullValues { column: String },

    /// File parsed but holds zero rows
    #[error("recording has no rows")]
    EmptyRecording,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parquet decode/encode error
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<TelemetryError> for ec_common::Error {
    fn from(err: TelemetryError) -> Self {
        match err {
            TelemetryError::MissingInput { path } => ec_common::Error::MissingInput { path },
            TelemetryError::Csv(e) => ec_common::Error::Export(e.to_string()),
            other => ec_common::Error::Ingest(other.to_string()),
        }
    }
}
