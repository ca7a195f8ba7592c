//! Ego Curvature recording storage.
//!
//! This crate provides:
//! - The Arrow schema for ego-motion recordings
//! - A whole-file Parquet reader with per-column diagnostics
//! - A Parquet writer for fixture and synthetic recordings
//! - CSV export of the augmented table

pub mod error;
pub mod export;
pub mod reader;
pub mod schema;
pub mod writer;

pub use error::TelemetryError;
pub use export::write_augmented_csv;
pub use reader::read_egomotion;
pub use schema::{egomotion_schema, REQUIRED_COLUMNS};
pub use writer::{synthesize_arc, write_egomotion};

/// Batch size used when streaming record batches out of a Parquet file.
pub const READ_BATCH_SIZE: usize = 8192;
