//! Integration tests for dfmanager argument parsing and startup errors.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::{PROJECT, Session, dfmanager};

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    dfmanager()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Dialogflow Agent Manager"));
}

#[test]
fn test_cli_help_lists_every_command() {
    dfmanager()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("restore"))
        .stdout(predicate::str::contains("entity-types"))
        .stdout(predicate::str::contains("update-entities"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--project"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    dfmanager()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "dfmanager ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_command_exits_two() {
    dfmanager()
        .arg("backup")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Startup failures ---

#[test]
fn test_missing_key_argument_fails_before_any_request() {
    dfmanager()
        .args(["export", "--project", PROJECT])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: argument key is missed"));
}

#[test]
fn test_unreadable_key_file_names_the_path() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let key = dir.path().join("no-such-key.json");
    dfmanager()
        .current_dir(dir.path())
        .arg("export")
        .arg("--key")
        .arg(&key)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no-such-key.json"));
    assert!(!dir.path().join(format!("{PROJECT}.zip")).exists());
}

#[test]
fn test_key_from_environment_variable() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let key = dir.path().join("env-key.json");
    dfmanager()
        .env("GCP_KEY", &key)
        .arg("import")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("env-key.json"));
}

#[test]
fn test_non_service_account_key_is_rejected() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let key = dir.path().join("user.json");
    std::fs::write(&key, r#"{"type":"authorized_user","client_id":"x"}"#).expect("write");
    dfmanager()
        .arg("entity-types")
        .arg("--key")
        .arg(&key)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid service account key"));
}

#[test]
fn test_json_mode_prints_error_object() {
    let output = dfmanager()
        .args(["export", "--json", "--project", PROJECT])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "missing_argument");
    assert_eq!(value["message"], "argument key is missed");
}

#[test]
fn test_restore_missing_archive_names_file_before_prompt_and_auth() {
    let server = httpmock::MockServer::start();
    let token = crate::support::mock_token(&server);
    let restore = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path(crate::support::agent_path("restore"));
        then.status(200);
    });
    let session = Session::new(&server);
    session
        .command()
        .args(["restore", "--file", "absent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.zip"));
    token.assert_calls(0);
    restore.assert_calls(0);
}

#[test]
fn test_import_missing_archive_reported_even_when_auth_is_down() {
    let server = httpmock::MockServer::start();
    let token = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/token");
        then.status(503);
    });
    let session = Session::new(&server);
    session
        .command()
        .args(["import", "-f", "absent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.zip"))
        .stderr(predicate::str::contains("token exchange").not());
    token.assert_calls(0);
}

#[test]
fn test_no_color_env_in_numeric_form_is_accepted() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    for value in ["1", "true", ""] {
        dfmanager()
            .env("NO_COLOR", value)
            .env("DFMANAGER_CONFIG", dir.path().join("config.yaml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("api.endpoint"))
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn test_no_color_flag_is_accepted() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    dfmanager()
        .env("DFMANAGER_CONFIG", dir.path().join("config.yaml"))
        .args(["config", "show", "--no-color"])
        .assert()
        .success();
}

#[test]
fn test_key_without_project_requires_project_flag() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mut key: serde_json::Value =
        serde_json::from_str(crate::support::KEY_JSON).expect("fixture");
    key.as_object_mut().expect("object").remove("project_id");
    let key_path = dir.path().join("key.json");
    std::fs::write(&key_path, key.to_string()).expect("write");

    dfmanager()
        .arg("export")
        .arg("--key")
        .arg(&key_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("argument project is missed"));
}
