//! Console summary for one analysis run.
//!
//! `SummaryReport` is a pure data struct; the text renderer lives beside it
//! and the JSON rendering is plain serde, so callers pick the format.

use crate::cue::CueReport;
use ec_common::{RecordingId, RunId};
use ec_kinematics::DerivedSample;
use serde::Serialize;
use std::fmt::Write as _;

/// Number of leading rows shown in the comparison head table.
pub const HEAD_ROWS: usize = 10;

/// One row of the comparison head table.
#[derive(Debug, Clone, Serialize)]
pub struct HeadRow {
    pub timestamp: i64,
    pub velocity: f64,
    pub yaw: f64,
    pub curvature_feature: f64,
    pub curvature: f64,
}

/// Everything the operator sees at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub run_id: RunId,
    pub recording: RecordingId,
    pub rows: usize,
    /// First rows of the comparison columns.
    pub head: Vec<HeadRow>,
    /// Where the augmented table was written.
    pub table_csv: String,
    /// Where the comparison chart was written.
    pub chart_svg: String,
    pub cue: CueReport,
}

impl SummaryReport {
    pub fn new(
        run_id: RunId,
        recording: RecordingId,
        rows: &[DerivedSample],
        table_csv: String,
        chart_svg: String,
        cue: CueReport,
    ) -> Self {
        let head = rows
            .iter()
            .take(HEAD_ROWS)
            .map(|r| HeadRow {
                timestamp: r.timestamp_us,
                velocity: r.velocity,
                yaw: r.yaw,
                curvature_feature: r.curvature_feature,
                curvature: r.curvature,
            })
            .collect();
        SummaryReport {
            run_id,
            recording,
            rows: rows.len(),
            head,
            table_csv,
            chart_svg,
            cue,
        }
    }

    /// Human-readable rendering of the full summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Loaded ego-motion recording {} with {} time steps.",
            self.recording, self.rows
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Derived vs. ground-truth curvature (first {} rows):",
            self.head.len()
        );
        let _ = writeln!(
            out,
            "{:>16} {:>10} {:>10} {:>18} {:>12}",
            "timestamp", "velocity", "yaw", "curvature_feature", "curvature"
        );
        for row in &self.head {
            let _ = writeln!(
                out,
                "{:>16} {:>10.4} {:>10.4} {:>18.6} {:>12.6}",
                row.timestamp, row.velocity, row.yaw, row.curvature_feature, row.curvature
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Augmented table saved to {}", self.table_csv);
        let _ = writeln!(out, "Comparison chart saved to {}", self.chart_svg);
        let _ = writeln!(out);
        let _ = writeln!(out, "--- VIDEO CUE POINTS ---");
        let _ = writeln!(out, "Window:   {}", self.cue.window);
        let _ = writeln!(out, "Start:    {:.2} s", self.cue.start_secs);
        let _ = writeln!(out, "End:      {:.2} s", self.cue.end_secs);
        let _ = writeln!(out, "Duration: {:.2} s", self.cue.duration_secs);
        let _ = writeln!(out, "Companion video: {}", self.cue.video_filename);
        let _ = writeln!(out);
        let _ = writeln!(out, "(run {})", self.run_id);

        out
    }
}
