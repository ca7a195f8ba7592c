//! Ego Curvature report generation.
//!
//! This crate turns a derived table into the user-facing artifacts:
//! - An SVG comparison chart of derived vs. ground-truth curvature
//! - The video cue-point report for a configured row window
//! - The console summary (text or JSON)

pub mod chart;
pub mod cue;
pub mod error;
pub mod summary;

pub use chart::{render_chart, save_chart, ChartOptions};
pub use cue::{compute_cue_points, CueReport};
pub use error::ReportError;
pub use summary::{HeadRow, SummaryReport, HEAD_ROWS};
