//! CSV export of the augmented table.

use crate::error::TelemetryError;
use ec_kinematics::DerivedSample;
use std::path::Path;
use tracing::info;

/// Write the augmented table as CSV: all original and derived columns, one
/// row per sample, header row, no positional index column.
pub fn write_augmented_csv(path: &Path, rows: &[DerivedSample]) -> Result<(), TelemetryError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(rows = rows.len(), path = %path.display(), "augmented table written");
    Ok(())
}
