//! End-to-end tests for the `onion` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// `onion` running in `dir` with an empty settings file, so the user's own
/// settings and environment cannot leak in.
fn onion(dir: &TempDir) -> Command {
    let settings = dir.path().join("settings.toml");
    if !settings.exists() {
        fs::write(&settings, "").unwrap();
    }
    let mut cmd = cargo_bin_cmd!("onion");
    cmd.current_dir(dir.path())
        .env_remove("ONION_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&settings);
    cmd
}

fn document(dir: &TempDir) -> serde_json::Value {
    read_json(&dir.path().join("onion.json"))
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn help_lists_commands() {
    cargo_bin_cmd!("onion")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("connect"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    cargo_bin_cmd!("onion")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_writes_an_empty_document_with_default_frameworks() {
    let dir = TempDir::new().unwrap();

    onion(&dir).arg("init").assert().success();

    let doc = document(&dir);
    assert_eq!(doc["uiFramework"], "react");
    assert_eq!(doc["diFramework"], "awilix");
    assert_eq!(doc["entities"], serde_json::json!([]));
    assert_eq!(doc["domainServiceConnections"], serde_json::json!({}));
}

#[test]
fn init_uses_flags_and_custom_path() {
    let dir = TempDir::new().unwrap();

    onion(&dir)
        .args(["-f", "arch/blog.json", "init", "--sample", "blog"])
        .args(["--ui", "vue", "--di", "angular", "--folder", "./web"])
        .assert()
        .success();

    let doc = read_json(&dir.path().join("arch/blog.json"));
    assert_eq!(doc["uiFramework"], "vue");
    assert_eq!(doc["diFramework"], "angular");
    assert_eq!(doc["folderPath"], "./web");
    assert_eq!(doc["domainServiceConnections"]["ModerationService"][0], "Comment");
}

#[test]
fn build_an_architecture_edge_by_edge() {
    let dir = TempDir::new().unwrap();
    onion(&dir).arg("init").assert().success();

    onion(&dir).args(["add", "entity", "User"]).assert().success();
    onion(&dir)
        .args(["add", "domain-service", "UserService"])
        .assert()
        .success();
    onion(&dir)
        .args(["add", "as", "UserAppService"])
        .assert()
        .success();

    onion(&dir)
        .args(["connect", "UserService", "User"])
        .assert()
        .success();
    onion(&dir)
        .args(["connect", "UserAppService", "UserService"])
        .assert()
        .success();
    onion(&dir)
        .args(["connect", "UserAppService", "IUserRepository"])
        .assert()
        .success();

    let doc = document(&dir);
    assert_eq!(doc["domainServiceConnections"]["UserService"][0], "User");
    assert_eq!(
        doc["applicationServiceDependencies"]["UserAppService"]["repositories"][0],
        "IUserRepository"
    );

    onion(&dir).arg("validate").assert().success();
}

#[test]
fn show_lists_every_ring() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    onion(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entities (3)"))
        .stdout(predicate::str::contains("CheckoutAppService"))
        .stdout(predicate::str::contains("IOrderRepository"));
}

#[test]
fn show_json_is_the_document() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    let out = onion(&dir)
        .args(["--output-format", "json", "show"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(shown, document(&dir));
}

#[test]
fn remove_takes_edges_with_it() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    onion(&dir)
        .args(["rm", "Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edge(s) went with it"));

    let doc = document(&dir);
    let checkout = &doc["applicationServiceDependencies"]["CheckoutAppService"];
    assert_eq!(checkout["repositories"], serde_json::json!(["IProductRepository"]));
    assert_eq!(doc["domainServiceConnections"]["OrderService"], serde_json::json!(["Product"]));

    onion(&dir).arg("validate").assert().success();
}

#[test]
fn targets_lists_candidates_and_current_edges() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    onion(&dir)
        .args(["targets", "AccountAppService"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderService"))
        .stdout(predicate::str::contains("IProductRepository"));

    onion(&dir)
        .args(["targets", "AccountAppService", "--current"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IUserRepository"))
        .stdout(predicate::str::contains("OrderService").not());
}

#[test]
fn disconnect_removes_one_edge() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    onion(&dir)
        .args(["disconnect", "OrderService", "Product"])
        .assert()
        .success();

    let doc = document(&dir);
    assert_eq!(doc["domainServiceConnections"]["OrderService"], serde_json::json!(["Order"]));
}

#[test]
fn connect_json_reports_the_outcome() {
    let dir = TempDir::new().unwrap();
    onion(&dir).args(["init", "--sample"]).assert().success();

    let out = onion(&dir)
        .args(["--output-format", "json", "connect", "UserService", "Order"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(outcome["success"], true);
    assert_eq!(
        outcome["data"]["domainServiceConnections"]["UserService"],
        serde_json::json!(["User", "Order"])
    );
}

#[test]
fn completions_name_the_binary() {
    cargo_bin_cmd!("onion")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onion"));
}

#[test]
fn settings_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("custom.toml");
    fs::write(
        &settings,
        "[defaults]\nfile = \"model.json\"\nui_framework = \"lit\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("onion")
        .current_dir(dir.path())
        .env_remove("ONION_FILE")
        .arg("--config")
        .arg(&settings)
        .arg("init")
        .assert()
        .success();

    let doc = read_json(&dir.path().join("model.json"));
    assert_eq!(doc["uiFramework"], "lit");
}

#[test]
fn config_get_prints_value() {
    let dir = TempDir::new().unwrap();
    onion(&dir)
        .args(["config", "get", "defaults.file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("onion.json"));
}
