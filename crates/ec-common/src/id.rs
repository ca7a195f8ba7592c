//! Recording and run identity types.
//!
//! A recording is identified by the base name of its ego-motion file with the
//! `.egomotion` suffix token removed; the companion video shares that base
//! name plus a camera view suffix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Filename token that marks an ego-motion export.
pub const EGOMOTION_SUFFIX: &str = ".egomotion";

/// Identifier for one recorded clip.
///
/// Derived from the input file name: `<id>.egomotion.parquet` yields `<id>`.
/// The id is treated as opaque; exports commonly use a UUID here but nothing
/// depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingId(pub String);

impl RecordingId {
    /// Derive the recording id from an input path.
    ///
    /// Strips the file extension and, if present, the trailing `.egomotion`
    /// token. A path with no usable stem falls back to `"recording"`.
    pub fn from_input_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("recording");
        let base = stem.strip_suffix(EGOMOTION_SUFFIX).unwrap_or(stem);
        RecordingId(base.to_string())
    }

    /// Name of the companion video clip for a camera view.
    pub fn video_filename(&self, view: CameraView) -> String {
        format!("{}.{}.mp4", self.0, view)
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Camera view suffix used in companion video filenames.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum CameraView {
    #[default]
    #[serde(rename = "front_wide_120fov")]
    #[value(name = "front_wide_120fov")]
    FrontWide120,
    #[serde(rename = "front_tele_30fov")]
    #[value(name = "front_tele_30fov")]
    FrontTele30,
    #[serde(rename = "cross_left_120fov")]
    #[value(name = "cross_left_120fov")]
    CrossLeft120,
    #[serde(rename = "cross_right_120fov")]
    #[value(name = "cross_right_120fov")]
    CrossRight120,
}

impl fmt::Display for CameraView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CameraView::FrontWide120 => "camera_front_wide_120fov",
            CameraView::FrontTele30 => "camera_front_tele_30fov",
            CameraView::CrossLeft120 => "camera_cross_left_120fov",
            CameraView::CrossRight120 => "camera_cross_right_120fov",
        };
        write!(f, "{}", name)
    }
}

/// Run ID for tracking individual analysis invocations.
///
/// Format: `run-<date>-<time>-<random>`
/// Example: `run-20260806-143022-abc123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl RunId {
    /// Generate a new run ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let random: String = uuid::Uuid::new_v4().to_string().chars().take(6).collect();
        RunId(format!("run-{}-{}", now.format("%Y%m%d-%H%M%S"), random))
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
