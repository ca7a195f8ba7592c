//! CLI E2E tests for the analyze and synth commands.
//!
//! Validates:
//! - Happy path writes both artifacts and prints the summary
//! - JSON output is parseable and carries the cue points
//! - Missing input, bad cue window, and bad flags produce the documented
//!   exit codes and name the offending path or window
//! - `synth` output is accepted by `analyze`

use assert_cmd::Command;
use ec_telemetry::{synthesize_arc, write_egomotion};
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn ec_core() -> Command {
    Command::cargo_bin("ec-core").expect("ec-core binary")
}

/// Write a 100-row synthetic recording and return its path.
fn fixture(dir: &Path) -> PathBuf {
    let path = dir.join("0f8e2b44-aaaa-bbbb-cccc-1234567890ab.egomotion.parquet");
    write_egomotion(&path, &synthesize_arc(100, 8.0, 0.05)).expect("write fixture");
    path
}

#[test]
fn analyze_writes_artifacts_and_reports_cues() {
    let dir = tempdir().unwrap();
    let recording = fixture(dir.path());
    let out_dir = dir.path().join("out");

    ec_core()
        .args([
            "analyze",
            recording.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--window-start",
            "10",
            "--window-end",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 time steps"))
        .stdout(predicate::str::contains("VIDEO CUE POINTS"))
        .stdout(predicate::str::contains(
            "0f8e2b44-aaaa-bbbb-cccc-1234567890ab.camera_front_wide_120fov.mp4",
        ));

    assert!(out_dir.join("curvature_feature_analysis.csv").exists());
    assert!(out_dir.join("curvature_profile.svg").exists());
}

#[test]
fn analyze_json_output_is_parseable() {
    let dir = tempdir().unwrap();
    let recording = fixture(dir.path());
    let out_dir = dir.path().join("out");

    let output = ec_core()
        .args([
            "analyze",
            recording.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--window-start",
            "10",
            "--window-end",
            "50",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).expect("parse JSON");
    assert_eq!(json["rows"], 100);
    assert_eq!(json["head"].as_array().expect("head array").len(), 10);

    // 10 Hz fixture: rows 10 and 50 sit at 1.0 s and 5.0 s.
    let start = json["cue"]["start_secs"].as_f64().expect("start_secs");
    let end = json["cue"]["end_secs"].as_f64().expect("end_secs");
    assert!((start - 1.0).abs() < 1e-9);
    assert!((end - 5.0).abs() < 1e-9);
    assert!(json["cue"]["video_filename"]
        .as_str()
        .expect("video_filename")
        .ends_with(".mp4"));
}

#[test]
fn missing_input_exits_11_and_names_the_path() {
    let dir = tempdir().unwrap();

    ec_core()
        .current_dir(dir.path())
        .args(["analyze", "nope.egomotion.parquet"])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("nope.egomotion.parquet"));
}

#[test]
fn default_window_on_short_recording_exits_13_with_hint() {
    let dir = tempdir().unwrap();
    let recording = fixture(dir.path());

    // 100 rows cannot satisfy the default 1000..=1500 window.
    ec_core()
        .args([
            "analyze",
            recording.to_str().unwrap(),
            "--out-dir",
            dir.path().join("out").to_str().unwrap(),
        ])
        .assert()
        .code(13)
        .stderr(predicate::str::contains("rows 1000..=1500"))
        .stderr(predicate::str::contains("0-based"));
}

#[test]
fn inverted_window_flags_exit_10() {
    let dir = tempdir().unwrap();
    let recording = fixture(dir.path());

    ec_core()
        .args([
            "analyze",
            recording.to_str().unwrap(),
            "--window-start",
            "50",
            "--window-end",
            "10",
        ])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("cue window"));
}

#[test]
fn synth_output_feeds_analyze() {
    let dir = tempdir().unwrap();
    let recording = dir.path().join("arc.egomotion.parquet");

    ec_core()
        .args([
            "synth",
            recording.to_str().unwrap(),
            "--rows",
            "60",
        ])
        .assert()
        .success();
    assert!(recording.exists());

    ec_core()
        .args([
            "analyze",
            recording.to_str().unwrap(),
            "--out-dir",
            dir.path().join("out").to_str().unwrap(),
            "--window-start",
            "5",
            "--window-end",
            "55",
            "--camera-view",
            "cross_right_120fov",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("arc.camera_cross_right_120fov.mp4"));
}
