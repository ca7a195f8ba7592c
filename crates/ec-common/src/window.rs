//! Row window selecting the video event of interest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive row-index window used for the video cue-point report.
///
/// Indices are 0-based positions into the derived table after the timestamp
/// sort. The defaults are dataset-specific tuning, not a general invariant,
/// and are meant to be overridden per clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueWindow {
    #[serde(default = "default_start_index")]
    pub start_index: usize,
    #[serde(default = "default_end_index")]
    pub end_index: usize,
}

fn default_start_index() -> usize {
    1000
}

fn default_end_index() -> usize {
    1500
}

impl Default for CueWindow {
    fn default() -> Self {
        CueWindow {
            start_index: default_start_index(),
            end_index: default_end_index(),
        }
    }
}

impl CueWindow {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        CueWindow {
            start_index,
            end_index,
        }
    }

    /// Number of rows covered, inclusive of both ends.
    pub fn row_count(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    /// An inverted window (end before start) selects nothing meaningful.
    pub fn is_inverted(&self) -> bool {
        self.end_index < self.start_index
    }

    /// Whether both indices fall inside a table of `rows` rows.
    pub fn fits(&self, rows: usize) -> bool {
        self.start_index < rows && self.end_index < rows
    }
}

impl fmt::Display for CueWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows {}..={}", self.start_index, self.end_index)
    }
}
