//! Tests for error messages, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn onion(dir: &TempDir) -> Command {
    let settings = dir.path().join("settings.toml");
    if !settings.exists() {
        fs::write(&settings, "").unwrap();
    }
    let mut cmd = cargo_bin_cmd!("onion");
    cmd.current_dir(dir.path())
        .env_remove("ONION_FILE")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&settings);
    cmd
}

const BROKEN: &str = r#"{
  "folderPath": "",
  "entities": [],
  "domainServices": ["S"],
  "applicationServices": [],
  "domainServiceConnections": { "S": ["Ghost"] },
  "applicationServiceDependencies": {},
  "uiFramework": "svelte",
  "diFramework": "awilix"
}"#;

#[test]
fn missing_document_is_not_found() {
    let dir = TempDir::new().unwrap();

    onion(&dir)
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No configuration found"))
        .stderr(predicate::str::contains("onion init"));
}

#[test]
fn no_color_accepts_any_value() {
    let dir = TempDir::new().unwrap();

    for value in ["1", "yes", "true", "0"] {
        onion(&dir)
            .env("NO_COLOR", value)
            .arg("show")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No configuration found"));
    }
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    onion(&dir).arg("init").assert().success();

    onion(&dir)
        .args(["init", "--sample"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    onion(&dir)
        .args(["init", "--sample", "--force"])
        .assert()
        .success();
}

#[test]
fn unknown_preset_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();

    onion(&dir)
        .args(["init", "--sample", "shop"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn outward_edge_is_refused() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();
    let before = fs::read_to_string(dir.path().join("onion.json")).unwrap();

    onion(&dir)
        .args(["connect", "CheckoutAppService", "Order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot connect"))
        .stderr(predicate::str::contains("may only connect to"));

    let after = fs::read_to_string(dir.path().join("onion.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_target_is_not_found() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    onion(&dir)
        .args(["connect", "UserService", "Invoice"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invoice"));
}

#[test]
fn refused_connection_json_outcome() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    let out = onion(&dir)
        .args(["--output-format", "json", "connect", "UserService", "UserService"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));

    let outcome: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(outcome["success"], false);
    assert!(outcome["data"].is_null());
    assert!(
        outcome["message"]
            .as_str()
            .unwrap()
            .contains("cannot connect to itself")
    );
}

#[test]
fn validate_lists_every_problem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("onion.json"), BROKEN).unwrap();

    onion(&dir)
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Ghost"))
        .stdout(predicate::str::contains("svelte"))
        .stderr(predicate::str::contains("2 problem(s)"));
}

#[test]
fn validate_json_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("onion.json"), BROKEN).unwrap();

    let out = onion(&dir)
        .args(["--output-format", "json", "validate"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
}

#[test]
fn fail_fast_stops_at_the_first_rule() {
    let dir = TempDir::new().unwrap();
    let dangling = BROKEN.replace("svelte", "react");
    fs::write(dir.path().join("onion.json"), dangling).unwrap();

    onion(&dir)
        .args(["validate", "--fail-fast"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ghost"));
}

#[test]
fn validate_rejects_non_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("onion.json"), "{ not json").unwrap();

    onion(&dir)
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid JSON"));
}

#[test]
fn unknown_settings_key() {
    let dir = TempDir::new().unwrap();

    onion(&dir)
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Known keys"));
}

#[test]
fn bad_arguments_exit_two() {
    cargo_bin_cmd!("onion")
        .args(["add", "table", "User"])
        .assert()
        .code(2);
}
