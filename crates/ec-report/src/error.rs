//! Error types for report generation.

use ec_common::CueWindow;
use thiserror::Error;

/// Errors that can occur while building report artifacts.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Cue window indices do not fit the derived table
    #[error("cue window {window} out of range for {rows} rows; row indices are 0-based positions after the timestamp sort")]
    CueWindowOutOfRange { window: CueWindow, rows: usize },

    /// Chart template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ReportError> for ec_common::Error {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::CueWindowOutOfRange { window, rows } => ec_common::Error::CueWindow {
                window: window.to_string(),
                rows,
            },
            ReportError::Template(e) => ec_common::Error::Render(e.to_string()),
            ReportError::Io(e) => ec_common::Error::Io(e),
        }
    }
}
