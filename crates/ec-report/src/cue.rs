//! Video cue-point computation.
//!
//! Maps a row-index window on the derived table to start/end offsets in
//! seconds from the beginning of the clip, so the event can be located in
//! the companion video.

use crate::error::ReportError;
use ec_common::{CameraView, CueWindow, RecordingId};
use ec_kinematics::DerivedSample;
use serde::{Deserialize, Serialize};

/// Cue points for the companion video clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueReport {
    /// The row window the cue points were computed from.
    pub window: CueWindow,
    /// Offset of the window start from the beginning of the clip, seconds.
    pub start_secs: f64,
    /// Offset of the window end from the beginning of the clip, seconds.
    pub end_secs: f64,
    pub duration_secs: f64,
    /// Inferred companion video filename.
    pub video_filename: String,
}

/// Compute cue points for `window` over the derived (timestamp-sorted) table.
///
/// Timestamps are relative to the clip start, taken as the first row's
/// timestamp after the sort (the minimum). Windows that do not fit the table
/// are rejected rather than clamped.
pub fn compute_cue_points(
    rows: &[DerivedSample],
    window: &CueWindow,
    recording: &RecordingId,
    view: CameraView,
) -> Result<CueReport, ReportError> {
    if !window.fits(rows.len()) {
        return Err(ReportError::CueWindowOutOfRange {
            window: *window,
            rows: rows.len(),
        });
    }

    // fits() guarantees at least one row.
    let clip_start_us = rows[0].timestamp_us;
    let start_secs = (rows[window.start_index].timestamp_us - clip_start_us) as f64 / 1e6;
    let end_secs = (rows[window.end_index].timestamp_us - clip_start_us) as f64 / 1e6;

    Ok(CueReport {
        window: *window,
        start_secs,
        end_secs,
        duration_secs: end_secs - start_secs,
        video_filename: recording.video_filename(view),
    })
}
