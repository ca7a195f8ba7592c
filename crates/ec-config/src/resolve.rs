//! Config resolution.
//!
//! Resolution order is deliberately short for a single-operator analysis
//! tool: an explicit `--config` path wins, otherwise the built-in defaults
//! apply. There is no environment or XDG lookup.

use crate::model::{AnalysisConfig, ConfigError};
use std::path::Path;

/// Load the analysis config from `path`, or return defaults when no path is
/// given. The result is always validated.
pub fn load_or_default(path: Option<&Path>) -> Result<AnalysisConfig, ConfigError> {
    let config = match path {
        None => AnalysisConfig::default(),
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
    };
    config.validate()?;
    Ok(config)
}
