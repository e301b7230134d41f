//! Shared fixtures: a mock server wired up as both token endpoint and API
//! endpoint, a key file pointing at it and an isolated config file.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const KEY_JSON: &str = include_str!("../fixtures/service-account.json");
pub const PROJECT: &str = "fixture-project";

pub fn dfmanager() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dfmanager"));
    cmd.env("NO_COLOR", "1")
        .env_remove("GCP_KEY")
        .env_remove("GCE_PROJECT")
        .env_remove("DFMANAGER_YES")
        .env_remove("CI")
        .env_remove("RUST_LOG");
    cmd
}

/// A temp working directory holding `key.json` and `config.yaml`, both
/// aimed at `server`.
pub struct Session {
    pub dir: TempDir,
    pub key: PathBuf,
    pub config: PathBuf,
}

impl Session {
    pub fn new(server: &MockServer) -> Self {
        let dir = TempDir::new().expect("temp dir");

        let mut key: Value = serde_json::from_str(KEY_JSON).unwrap();
        key["token_uri"] = json!(server.url("/token"));
        let key_path = dir.path().join("key.json");
        std::fs::write(&key_path, key.to_string()).unwrap();

        let config_path = dir.path().join("config.yaml");
        std::fs::write(
            &config_path,
            format!(
                "api:\n  endpoint: {}\n  timeout_secs: 5\noperation:\n  poll_interval_ms: 1\n",
                server.base_url()
            ),
        )
        .unwrap();

        Self {
            dir,
            key: key_path,
            config: config_path,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `dfmanager` running inside the session directory with `--key` set.
    pub fn command(&self) -> Command {
        let mut cmd = dfmanager();
        cmd.current_dir(self.dir.path())
            .env("DFMANAGER_CONFIG", &self.config)
            .arg("--key")
            .arg(&self.key);
        cmd
    }
}

/// Answer the JWT grant with a fixed bearer token.
pub fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/token")
            .body_includes("jwt-bearer");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "access_token": "ya29.it", "expires_in": 3600 }));
    })
}

pub fn agent_path(verb: &str) -> String {
    format!("/v2/projects/{PROJECT}/agent:{verb}")
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("file written")
}
