//! Yaw extraction, speed, and angle unwrapping.

use std::f64::consts::{PI, TAU};

/// Extract the yaw angle (rotation about the vertical axis) from a
/// quaternion, in radians within (−π, π].
///
/// Standard Z-axis Euler conversion. Exact only for unit quaternions;
/// non-unit input yields an approximate angle, which is accepted here rather
/// than rejected.
pub fn yaw_from_quaternion(qx: f64, qy: f64, qz: f64, qw: f64) -> f64 {
    (2.0 * (qw * qz + qx * qy)).atan2(1.0 - 2.0 * (qy * qy + qz * qz))
}

/// Scalar speed from velocity components, always ≥ 0.
pub fn speed(vx: f64, vy: f64, vz: f64) -> f64 {
    (vx * vx + vy * vy + vz * vz).sqrt()
}

/// Remove ±π wraparound discontinuities from an angle sequence.
///
/// Each consecutive delta is brought into [−π, π) (with a +π preference when
/// the raw delta is positive) by adding multiples of 2π, and the corrections
/// accumulate over the sequence. The first element is returned unchanged.
pub fn unwrap_angles(angles: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(angles.len());
    let mut prev = match angles.first() {
        Some(&first) => {
            out.push(first);
            first
        }
        None => return out,
    };

    let mut correction = 0.0;
    for &angle in &angles[1..] {
        let delta = angle - prev;
        let mut wrapped = (delta + PI).rem_euclid(TAU) - PI;
        if wrapped == -PI && delta > 0.0 {
            wrapped = PI;
        }
        correction += wrapped - delta;
        out.push(angle + correction);
        prev = angle;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn identity_quaternion_has_zero_yaw() {
        assert_eq!(yaw_from_quaternion(0.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn quarter_turn_yaw() {
        // qz = sin(π/4), qw = cos(π/4) encodes a +π/2 yaw.
        let half = PI / 4.0;
        let yaw = yaw_from_quaternion(0.0, 0.0, half.sin(), half.cos());
        assert!(approx_eq(yaw, PI / 2.0, 1e-12));
    }

    #[test]
    fn non_unit_quaternion_yaw_stays_finite() {
        let half = 0.3f64;
        let (qz, qw) = (half.sin(), half.cos());
        let yaw = yaw_from_quaternion(0.0, 0.0, qz, qw);
        let yaw_scaled = yaw_from_quaternion(0.0, 0.0, 2.0 * qz, 2.0 * qw);
        // Scaling the components changes the result (the formula is exact
        // only for unit quaternions), but it must stay finite.
        assert!(yaw.is_finite() && yaw_scaled.is_finite());
        assert!(approx_eq(yaw, 0.6, 1e-12));
    }

    #[test]
    fn speed_is_euclidean_norm() {
        assert!(approx_eq(speed(3.0, 4.0, 0.0), 5.0, 1e-12));
        assert_eq!(speed(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn unwrap_empty_and_single() {
        assert!(unwrap_angles(&[]).is_empty());
        assert_eq!(unwrap_angles(&[1.5]), vec![1.5]);
    }

    #[test]
    fn unwrap_removes_positive_wraparound() {
        // Heading crosses +π: 3.0 → -3.0 is a small positive turn, not a -6 jump.
        let out = unwrap_angles(&[3.0, -3.0]);
        assert!(approx_eq(out[1], 3.0 + (TAU - 6.0), 1e-12));
    }

    #[test]
    fn unwrap_removes_negative_wraparound() {
        let out = unwrap_angles(&[-3.0, 3.0]);
        assert!(approx_eq(out[1], -3.0 - (TAU - 6.0), 1e-12));
    }

    #[test]
    fn unwrap_preserves_small_deltas() {
        let input = [0.0, 0.1, 0.2, 0.15];
        let out = unwrap_angles(&input);
        for (a, b) in input.iter().zip(out.iter()) {
            assert!(approx_eq(*a, *b, 1e-12));
        }
    }

    #[test]
    fn unwrap_accumulates_over_multiple_turns() {
        // Two full turns sampled at quarter-turn steps stay monotone.
        let step = PI / 2.0;
        let wrapped: Vec<f64> = (0..9)
            .map(|i| {
                let a = i as f64 * step;
                (a + PI).rem_euclid(TAU) - PI
            })
            .collect();
        let out = unwrap_angles(&wrapped);
        for (i, v) in out.iter().enumerate() {
            assert!(approx_eq(*v, wrapped[0] + i as f64 * step, 1e-9));
        }
    }
}
