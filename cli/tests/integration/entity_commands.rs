//! Integration tests for `dfmanager entity-types` and `update-entities`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use crate::support::{PROJECT, Session, mock_token};

fn entity_types_path() -> String {
    format!("/v2/projects/{PROJECT}/agent/entityTypes")
}

#[test]
fn test_entity_types_lists_all_pages() {
    let server = MockServer::start();
    mock_token(&server);
    let second = server.mock(|when, then| {
        when.method(GET)
            .path(entity_types_path())
            .query_param("pageToken", "page-2");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "entityTypes": [{
                    "name": format!("projects/{PROJECT}/agent/entityTypes/e2"),
                    "displayName": "color",
                    "kind": "KIND_MAP",
                    "entities": [{ "value": "red", "synonyms": ["red"] }]
                }]
            }));
    });
    let first = server.mock(|when, then| {
        when.method(GET)
            .path(entity_types_path())
            .query_param_missing("pageToken");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "entityTypes": [{
                    "name": format!("projects/{PROJECT}/agent/entityTypes/e1"),
                    "displayName": "city",
                    "kind": "KIND_MAP"
                }],
                "nextPageToken": "page-2"
            }));
    });
    let session = Session::new(&server);

    let output = session
        .command()
        .args(["entity-types", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    first.assert();
    second.assert();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["project"], PROJECT);
    let names: Vec<&str> = value["entityTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|et| et["displayName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["city", "color"]);
}

#[test]
fn test_entity_types_human_table() {
    let server = MockServer::start();
    mock_token(&server);
    server.mock(|when, then| {
        when.method(GET).path(entity_types_path());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "entityTypes": [{
                    "name": format!("projects/{PROJECT}/agent/entityTypes/e1"),
                    "displayName": "city",
                    "kind": "KIND_MAP"
                }]
            }));
    });
    let session = Session::new(&server);

    session
        .command()
        .arg("et")
        .assert()
        .success()
        .stdout(predicate::str::contains("city"))
        .stdout(predicate::str::contains("e1"));
}

#[test]
fn test_update_entities_overwrites_entity_list() {
    let server = MockServer::start();
    mock_token(&server);
    let update = server.mock(|when, then| {
        when.method(POST)
            .path(format!("{}:batchUpdate", entity_types_path()))
            .json_body(json!({
                "entityTypeBatchInline": {
                    "entityTypes": [{
                        "name": format!("projects/{PROJECT}/agent/entityTypes/e1"),
                        "entities": [
                            { "value": "Paris", "synonyms": ["Paris", "Paname"] },
                            { "value": "Lyon", "synonyms": [] }
                        ]
                    }]
                },
                "updateMask": "entities"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "name": "op", "done": true }));
    });
    let session = Session::new(&server);
    std::fs::write(
        session.path("cities.json"),
        r#"[{"value":"Paris","synonyms":["Paris","Paname"]},{"value":"Lyon"}]"#,
    )
    .unwrap();

    session
        .command()
        .args(["update-entities", "e1", "cities.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entities"));
    update.assert();
}

#[test]
fn test_update_entities_unparseable_file_sends_nothing() {
    let server = MockServer::start();
    mock_token(&server);
    let update = server.mock(|when, then| {
        when.method(POST)
            .path(format!("{}:batchUpdate", entity_types_path()));
        then.status(200);
    });
    let session = Session::new(&server);
    std::fs::write(session.path("cities.json"), "not json").unwrap();

    session
        .command()
        .args(["ue", "e1", "cities.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cities.json"));
    update.assert_calls(0);
}
