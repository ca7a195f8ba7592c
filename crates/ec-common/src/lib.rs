//! Ego Curvature common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the ec-* crates:
//! - Recording and run identity types
//! - The unified error type with stable numeric codes
//! - Output format specification
//! - The video cue window
//! - Schema versioning

pub mod error;
pub mod id;
pub mod output;
pub mod schema;
pub mod window;

pub use error::{Error, Result};
pub use id::{CameraView, RecordingId, RunId};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
pub use window::CueWindow;
