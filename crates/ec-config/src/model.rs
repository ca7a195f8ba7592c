//! Typed analysis configuration.
//!
//! These types match the analysis.json file format. Every field has a
//! default so an empty object (or no file at all) resolves to the canonical
//! analysis.

use ec_common::{CameraView, CueWindow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("config schema version mismatch: expected major of {expected}, got {actual}")]
    SchemaMismatch { expected: String, actual: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for ec_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::SchemaMismatch { expected, actual } => {
                ec_common::Error::SchemaMismatch { expected, actual }
            }
            other => ec_common::Error::Config(other.to_string()),
        }
    }
}

/// Complete analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Row window for the video cue-point report.
    #[serde(default)]
    pub cue_window: CueWindow,

    /// Camera view used for the companion video filename.
    #[serde(default)]
    pub camera_view: CameraView,

    /// Derivation constants.
    #[serde(default)]
    pub derive: DeriveSettings,

    /// Output filenames, relative to the output directory.
    #[serde(default)]
    pub output: OutputSettings,
}

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            schema_version: default_schema_version(),
            cue_window: CueWindow::default(),
            camera_view: CameraView::default(),
            derive: DeriveSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl AnalysisConfig {
    /// Semantic validation beyond what serde enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ec_common::schema::is_compatible(&self.schema_version) {
            return Err(ConfigError::SchemaMismatch {
                expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
                actual: self.schema_version.clone(),
            });
        }
        if self.cue_window.is_inverted() {
            return Err(ConfigError::Invalid(format!(
                "cue window start must not exceed end (got {})",
                self.cue_window
            )));
        }
        if !(self.derive.speed_epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "derive.speed_epsilon must be positive (got {})",
                self.derive.speed_epsilon
            )));
        }
        if !(self.derive.first_delta_t_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "derive.first_delta_t_secs must be positive (got {})",
                self.derive.first_delta_t_secs
            )));
        }
        if self.output.table_csv.is_empty() {
            return Err(ConfigError::Invalid(
                "output.table_csv must not be empty".to_string(),
            ));
        }
        if self.output.chart_svg.is_empty() {
            return Err(ConfigError::Invalid(
                "output.chart_svg must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Derivation constants, mirrored into `ec_kinematics::DeriveParams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveSettings {
    #[serde(default = "default_speed_epsilon")]
    pub speed_epsilon: f64,

    #[serde(default = "default_first_delta_t_secs")]
    pub first_delta_t_secs: f64,
}

fn default_speed_epsilon() -> f64 {
    0.01
}

fn default_first_delta_t_secs() -> f64 {
    1e-5
}

impl Default for DeriveSettings {
    fn default() -> Self {
        DeriveSettings {
            speed_epsilon: default_speed_epsilon(),
            first_delta_t_secs: default_first_delta_t_secs(),
        }
    }
}

/// Output filenames, relative to the output directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_table_csv")]
    pub table_csv: String,

    #[serde(default = "default_chart_svg")]
    pub chart_svg: String,
}

fn default_table_csv() -> String {
    "curvature_feature_analysis.csv".to_string()
}

fn default_chart_svg() -> String {
    "curvature_profile.svg".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            table_csv: default_table_csv(),
            chart_svg: default_chart_svg(),
        }
    }
}
