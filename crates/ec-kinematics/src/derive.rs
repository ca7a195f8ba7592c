//! Instantaneous curvature derivation from ego-motion samples.
//!
//! Curvature (kappa) is approximated as yaw rate divided by speed. The
//! derivation sorts by timestamp, extracts yaw from the orientation
//! quaternion, unwraps the heading trace, first-differences it against time,
//! and divides by speed with a small floor to keep near-stationary samples
//! finite.

use crate::angles::{speed, unwrap_angles, yaw_from_quaternion};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the input recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgoSample {
    /// Microseconds; may arrive unsorted.
    #[serde(rename = "timestamp")]
    pub timestamp_us: i64,
    pub qx: f64,
    pub qy: f64,
    pub qz: f64,
    pub qw: f64,
    /// Velocity components, m/s.
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    /// Ground-truth curvature. Opaque reference data; never read by the
    /// derivation.
    pub curvature: f64,
}

/// One row of the augmented output table.
///
/// Field order is the CSV column order: the original columns first, then the
/// derived ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSample {
    #[serde(rename = "timestamp")]
    pub timestamp_us: i64,
    pub qx: f64,
    pub qy: f64,
    pub qz: f64,
    pub qw: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub curvature: f64,
    /// Heading in radians, (−π, π].
    pub yaw: f64,
    /// Scalar speed, m/s, ≥ 0.
    pub velocity: f64,
    /// Heading with ±π discontinuities removed.
    pub yaw_unwrapped: f64,
    /// First difference of `yaw_unwrapped`; row 0 is exactly 0.
    pub delta_yaw: f64,
    /// First difference of the timestamp in seconds; row 0 is the configured
    /// fallback constant.
    pub delta_t: f64,
    /// rad/s.
    pub yaw_rate: f64,
    /// The principal output: yaw rate over floored speed, rad/m.
    pub curvature_feature: f64,
}

/// Tunable constants of the derivation.
///
/// Downstream consumers compare exported tables across runs, so the defaults
/// should be left alone unless output compatibility no longer matters. The
/// row-0 `first_delta_t_secs` is a fabricated boundary value, not a
/// measurement; row 0 of the output is always a zero-rate artifact of that
/// choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeriveParams {
    /// Additive speed floor in the curvature denominator, m/s.
    pub speed_epsilon: f64,
    /// Stand-in time delta for the first row, seconds.
    pub first_delta_t_secs: f64,
}

impl Default for DeriveParams {
    fn default() -> Self {
        DeriveParams {
            speed_epsilon: 0.01,
            first_delta_t_secs: 1e-5,
        }
    }
}

/// Errors from the kinematics core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KinematicsError {
    /// The recording holds no samples.
    #[error("recording has no samples")]
    EmptyRecording,
}

/// Microseconds per second.
const US_PER_SEC: f64 = 1e6;

/// Derive per-sample curvature from an ego-motion recording.
///
/// Sorts the samples by ascending timestamp (stable, so equal timestamps
/// keep their relative order), then computes yaw, speed, unwrapped heading,
/// first differences, yaw rate, and the curvature feature. Output length
/// equals input length and every derived field is finite wherever the inputs
/// are finite and `delta_t` is nonzero.
///
/// Pure: no side effects beyond the returned table, and the ground-truth
/// `curvature` column passes through untouched.
pub fn derive_curvature(
    mut samples: Vec<EgoSample>,
    params: &DeriveParams,
) -> Result<Vec<DerivedSample>, KinematicsError> {
    if samples.is_empty() {
        return Err(KinematicsError::EmptyRecording);
    }

    samples.sort_by_key(|s| s.timestamp_us);

    let yaws: Vec<f64> = samples
        .iter()
        .map(|s| yaw_from_quaternion(s.qx, s.qy, s.qz, s.qw))
        .collect();
    let unwrapped = unwrap_angles(&yaws);

    let mut out = Vec::with_capacity(samples.len());
    for (i, sample) in samples.iter().enumerate() {
        let velocity = speed(sample.vx, sample.vy, sample.vz);

        let delta_yaw = if i == 0 {
            0.0
        } else {
            unwrapped[i] - unwrapped[i - 1]
        };
        let delta_t = if i == 0 {
            params.first_delta_t_secs
        } else {
            (sample.timestamp_us - samples[i - 1].timestamp_us) as f64 / US_PER_SEC
        };

        let yaw_rate = delta_yaw / delta_t;
        let curvature_feature = yaw_rate / (velocity.abs() + params.speed_epsilon);

        out.push(DerivedSample {
            timestamp_us: sample.timestamp_us,
            qx: sample.qx,
            qy: sample.qy,
            qz: sample.qz,
            qw: sample.qw,
            vx: sample.vx,
            vy: sample.vy,
            vz: sample.vz,
            curvature: sample.curvature,
            yaw: yaws[i],
            velocity,
            yaw_unwrapped: unwrapped[i],
            delta_yaw,
            delta_t,
            yaw_rate,
            curvature_feature,
        });
    }

    Ok(out)
}
