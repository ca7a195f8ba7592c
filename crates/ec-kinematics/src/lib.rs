//! Ego Curvature kinematics core.
//!
//! Pure numeric transforms over ego-motion samples:
//! - Quaternion-to-yaw extraction and speed
//! - Angle unwrapping across the ±π boundary
//! - Instantaneous curvature derivation (yaw rate over speed)
//!
//! Nothing in this crate performs I/O or touches external resources.

pub mod angles;
pub mod derive;

pub use angles::{speed, unwrap_angles, yaw_from_quaternion};
pub use derive::{derive_curvature, DeriveParams, DerivedSample, EgoSample, KinematicsError};
