//! Whole-file Parquet reader for ego-motion recordings.
//!
//! The reader materializes the full table in memory; a recording is a few
//! thousand rows at ~10 Hz, far below anything that needs streaming.

use crate::error::TelemetryError;
use crate::schema::{
    COL_CURVATURE, COL_QW, COL_QX, COL_QY, COL_QZ, COL_TIMESTAMP, COL_VX, COL_VY, COL_VZ,
};
use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int64Type, TimeUnit, TimestampMicrosecondType,
};
use ec_kinematics::EgoSample;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Read one ego-motion recording into memory.
///
/// Fails fast with a diagnostic naming the offending path or column:
/// a missing file, a missing required column, an unsupported column type,
/// nulls inside a column, or a zero-row file are all terminal.
pub fn read_egomotion(path: &Path) -> Result<Vec<EgoSample>, TelemetryError> {
    if !path.exists() {
        return Err(TelemetryError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(crate::READ_BATCH_SIZE)
        .build()?;

    let mut samples = Vec::new();
    for batch in reader {
        let batch = batch?;
        append_batch(&batch, &mut samples)?;
        debug!(rows = batch.num_rows(), "decoded record batch");
    }

    if samples.is_empty() {
        return Err(TelemetryError::EmptyRecording);
    }

    info!(
        rows = samples.len(),
        path = %path.display(),
        "loaded ego-motion recording"
    );
    Ok(samples)
}

fn append_batch(batch: &RecordBatch, out: &mut Vec<EgoSample>) -> Result<(), TelemetryError> {
    let timestamp = timestamp_column(batch)?;
    let qx = float_column(batch, COL_QX)?;
    let qy = float_column(batch, COL_QY)?;
    let qz = float_column(batch, COL_QZ)?;
    let qw = float_column(batch, COL_QW)?;
    let vx = float_column(batch, COL_VX)?;
    let vy = float_column(batch, COL_VY)?;
    let vz = float_column(batch, COL_VZ)?;
    let curvature = float_column(batch, COL_CURVATURE)?;

    out.reserve(batch.num_rows());
    for i in 0..batch.num_rows() {
        out.push(EgoSample {
            timestamp_us: timestamp[i],
            qx: qx[i],
            qy: qy[i],
            qz: qz[i],
            qw: qw[i],
            vx: vx[i],
            vy: vy[i],
            vz: vz[i],
            curvature: curvature[i],
        });
    }
    Ok(())
}

fn required_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a ArrayRef, TelemetryError> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| TelemetryError::MissingColumn {
            column: name.to_string(),
        })?;
    if column.null_count() > 0 {
        return Err(TelemetryError::NullValues {
            column: name.to_string(),
        });
    }
    Ok(column)
}

/// Timestamps are accepted as plain Int64 microseconds or as an Arrow
/// timestamp[µs] column; both collapse to i64 microseconds.
fn timestamp_column(batch: &RecordBatch) -> Result<Vec<i64>, TelemetryError> {
    let column = required_column(batch, COL_TIMESTAMP)?;
    match column.data_type() {
        DataType::Int64 => Ok(column.as_primitive::<Int64Type>().values().to_vec()),
        DataType::Timestamp(TimeUnit::Microsecond, _) => Ok(column
            .as_primitive::<TimestampMicrosecondType>()
            .values()
            .to_vec()),
        other => Err(TelemetryError::ColumnType {
            column: COL_TIMESTAMP.to_string(),
            expected: "Int64 or Timestamp(Microsecond)",
            actual: other.to_string(),
        }),
    }
}

/// Float columns are Float64 in canonical exports; Float32 is promoted.
fn float_column(batch: &RecordBatch, name: &str) -> Result<Vec<f64>, TelemetryError> {
    let column = required_column(batch, name)?;
    match column.data_type() {
        DataType::Float64 => Ok(column.as_primitive::<Float64Type>().values().to_vec()),
        DataType::Float32 => Ok(column
            .as_primitive::<Float32Type>()
            .values()
            .iter()
            .map(|&v| v as f64)
            .collect()),
        other => Err(TelemetryError::ColumnType {
            column: name.to_string(),
            expected: "Float64",
            actual: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{synthesize_arc, write_egomotion};
    use arrow::array::{Float64Array, Int64Array};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use std::sync::Arc;

    #[test]
    fn missing_file_names_the_path() {
        let err = read_egomotion(Path::new("/nonexistent/clip.egomotion.parquet")).unwrap_err();
        assert!(matches!(err, TelemetryError::MissingInput { .. }));
        assert!(err.to_string().contains("/nonexistent/clip.egomotion.parquet"));
    }

    #[test]
    fn round_trips_a_synthetic_recording() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arc.egomotion.parquet");
        let samples = synthesize_arc(250, 8.0, 0.05);
        write_egomotion(&path, &samples).unwrap();

        let back = read_egomotion(&path).unwrap();
        assert_eq!(back.len(), 250);
        assert_eq!(back[0], samples[0]);
        assert_eq!(back[249], samples[249]);
    }

    #[test]
    fn missing_column_is_named() {
        // A file with only a timestamp column.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.parquet");
        let schema = Arc::new(Schema::new(vec![Field::new(
            COL_TIMESTAMP,
            DataType::Int64,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(Int64Array::from(vec![0i64, 100_000]))],
        )
        .unwrap();
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = read_egomotion(&path).unwrap_err();
        match err {
            TelemetryError::MissingColumn { column } => assert_eq!(column, "qx"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_column_type_is_diagnosed() {
        // Timestamp stored as Float64.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badtype.parquet");
        let schema = Arc::new(Schema::new(vec![Field::new(
            COL_TIMESTAMP,
            DataType::Float64,
            false,
        )]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(Float64Array::from(vec![0.0, 0.1]))],
        )
        .unwrap();
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = read_egomotion(&path).unwrap_err();
        match err {
            TelemetryError::ColumnType { column, .. } => assert_eq!(column, "timestamp"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_recording_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.parquet");
        write_egomotion(&path, &[]).unwrap();

        let err = read_egomotion(&path).unwrap_err();
        assert!(matches!(err, TelemetryError::EmptyRecording));
    }
}
