//! Integration tests for `dfmanager config`.
//!
//! All tests set `DFMANAGER_CONFIG` to a temp path so they never read or
//! write `~/.dfmanager/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::support::dfmanager;

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    dfmanager()
        .args(["config", "show"])
        .env("DFMANAGER_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://dialogflow.googleapis.com"))
        .stdout(predicate::str::contains("operation.poll_interval_ms"));
}

#[test]
fn test_config_set_persists_value() {
    let (_dir, path) = temp_config_path();
    dfmanager()
        .args(["config", "set", "api.timeout_secs", "30"])
        .env("DFMANAGER_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set api.timeout_secs = 30"));

    let content = std::fs::read_to_string(&path).expect("config written");
    assert!(content.contains("timeout_secs: 30"), "{content}");
}

#[test]
fn test_config_set_then_show_json() {
    let (_dir, path) = temp_config_path();
    dfmanager()
        .args(["config", "set", "operation.poll_interval_ms", "250"])
        .env("DFMANAGER_CONFIG", &path)
        .assert()
        .success();

    let output = dfmanager()
        .args(["config", "show", "--json"])
        .env("DFMANAGER_CONFIG", &path)
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["config"]["operation"]["poll_interval_ms"], 250);
    assert_eq!(value["path"], path);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    dfmanager()
        .args(["config", "set", "api.region", "eu"])
        .env("DFMANAGER_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: api.region"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_invalid_value_fails() {
    let (_dir, path) = temp_config_path();
    dfmanager()
        .args(["config", "set", "api.timeout_secs", "0"])
        .env("DFMANAGER_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for api.timeout_secs"));
}
