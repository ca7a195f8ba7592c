//! Parquet writer for ego-motion recordings.
//!
//! Real recordings come from the data platform; this writer exists for the
//! `synth` subcommand and test fixtures, and writes the same canonical
//! schema the reader expects.

use crate::error::TelemetryError;
use crate::schema::egomotion_schema;
use arrow::array::{Float64Array, Int64Array, RecordBatch};
use ec_kinematics::EgoSample;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Write samples as a zstd-compressed Parquet file in the canonical schema.
pub fn write_egomotion(path: &Path, samples: &[EgoSample]) -> Result<(), TelemetryError> {
    let schema = Arc::new(egomotion_schema());

    let timestamp: Int64Array = samples.iter().map(|s| s.timestamp_us).collect::<Vec<_>>().into();
    let columns: Vec<Arc<dyn arrow::array::Array>> = vec![
        Arc::new(timestamp),
        Arc::new(float_array(samples, |s| s.qx)),
        Arc::new(float_array(samples, |s| s.qy)),
        Arc::new(float_array(samples, |s| s.qz)),
        Arc::new(float_array(samples, |s| s.qw)),
        Arc::new(float_array(samples, |s| s.vx)),
        Arc::new(float_array(samples, |s| s.vy)),
        Arc::new(float_array(samples, |s| s.vz)),
        Arc::new(float_array(samples, |s| s.curvature)),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::default()))
        .build();
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    info!(rows = samples.len(), path = %path.display(), "recording written");
    Ok(())
}

fn float_array(samples: &[EgoSample], f: impl Fn(&EgoSample) -> f64) -> Float64Array {
    samples.iter().map(f).collect::<Vec<_>>().into()
}

/// Synthesize a constant-speed, constant-yaw-rate arc sampled at 10 Hz.
///
/// The ground-truth `curvature` column is filled with the analytic value
/// `yaw_rate / speed`, so derived and ground-truth series should overlap
/// (after row 0) when the derivation is correct.
pub fn synthesize_arc(rows: usize, speed_mps: f64, yaw_rate_rps: f64) -> Vec<EgoSample> {
    let truth = if speed_mps > 0.0 {
        yaw_rate_rps / speed_mps
    } else {
        0.0
    };

    (0..rows)
        .map(|i| {
            let t = i as f64 * 0.1;
            let yaw = yaw_rate_rps * t;
            let half = yaw / 2.0;
            EgoSample {
                timestamp_us: (i as i64) * 100_000,
                qx: 0.0,
                qy: 0.0,
                qz: half.sin(),
                qw: half.cos(),
                vx: speed_mps * yaw.cos(),
                vy: speed_mps * yaw.sin(),
                vz: 0.0,
                curvature: truth,
            }
        })
        .collect()
}
