//! Exit codes for the ec-core CLI.
//!
//! Exit codes communicate the failure class without requiring output
//! parsing. They are stable across releases.

/// Exit codes for ec-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed, outputs written
    Clean = 0,

    /// Configuration error (bad file, bad flag combination)
    ConfigError = 10,

    /// Recording missing or malformed
    IngestError = 11,

    /// Curvature derivation error
    DeriveError = 12,

    /// Cue window or chart/report error
    ReportError = 13,

    /// I/O or export error
    IoError = 14,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an error.
    pub fn is_error(self) -> bool {
        (self as i32) != 0
    }

    /// Map a pipeline error to its exit code via the stable error code.
    pub fn from_error(err: &ec_common::Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::IngestError,
            30..=39 => ExitCode::DeriveError,
            40..=49 => ExitCode::ReportError,
            50..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_input_maps_to_ingest_error() {
        let err = ec_common::Error::MissingInput {
            path: PathBuf::from("x.parquet"),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::IngestError);
        assert_eq!(ExitCode::IngestError.as_i32(), 11);
    }

    #[test]
    fn cue_window_maps_to_report_error() {
        let err = ec_common::Error::CueWindow {
            window: "rows 1000..=1500".to_string(),
            rows: 10,
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::ReportError);
    }

    #[test]
    fn clean_is_not_an_error() {
        assert!(!ExitCode::Clean.is_error());
        assert!(ExitCode::ConfigError.is_error());
    }
}
