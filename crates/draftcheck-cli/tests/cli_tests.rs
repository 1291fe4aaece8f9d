//! Integration tests for the draftcheck binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// The binary, isolated from the user's config and environment.
fn draftcheck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("draftcheck").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .write_stdin("");
    cmd
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn valid_draft_passes() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .arg("check")
        .arg(fixture("valid_mug.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ceramic-mug"))
        .stdout(predicate::str::contains("Checked 1 draft: 1 valid, 0 invalid"));
}

#[test]
fn invalid_draft_lists_every_message_and_exits_2() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .arg("check")
        .arg(fixture("everything_wrong.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("title: Product title is required"))
        .stdout(predicate::str::contains("category_id: Category is required"))
        .stdout(predicate::str::contains(
            "base_price: Selling price must be greater than 0",
        ))
        .stdout(predicate::str::contains(
            "cost_price: Cost price cannot be negative",
        ))
        .stdout(predicate::str::contains("compare_price: MRP cannot be negative"))
        .stdout(predicate::str::contains(
            "description: Product description is required",
        ))
        .stdout(predicate::str::contains(
            "simple_fields: Product details are required",
        ))
        .stderr(predicate::str::contains("1 of 1 checked drafts failed validation"));
}

#[test]
fn json_report_carries_exact_messages() {
    let home = TempDir::new().unwrap();
    let assert = draftcheck(&home)
        .args(["--output-format", "json", "check"])
        .arg(fixture("mrp_below.toml"))
        .assert()
        .code(2);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["invalid"], 1);
    assert!(report["checked_at"].is_string());
    assert_eq!(report["reports"][0]["label"], "headphones");
    assert_eq!(
        report["reports"][0]["errors"],
        serde_json::json!({
            "compare_price": "MRP should be greater than or equal to selling price"
        })
    );
}

#[test]
fn batch_file_labels_each_draft() {
    let home = TempDir::new().unwrap();
    let batch = fixture("batch.json");
    draftcheck(&home)
        .arg("check")
        .arg(&batch)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(format!("{}#2", batch.display())))
        .stdout(predicate::str::contains("title: Title cannot contain HTML tags"))
        .stdout(predicate::str::contains(
            "sku: SKU can only contain letters, numbers, hyphens, and underscores",
        ))
        .stdout(predicate::str::contains("Checked 3 drafts: 2 valid, 1 invalid"));
}

#[test]
fn fail_fast_stops_early() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["check", "--fail-fast"])
        .arg(fixture("batch.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Stopped at the first invalid draft"))
        .stdout(predicate::str::contains("Checked 2 drafts: 1 valid, 1 invalid"));
}

#[test]
fn directory_is_walked() {
    let home = TempDir::new().unwrap();
    let drafts = home.path().join("drafts");
    fs::create_dir_all(drafts.join("nested")).unwrap();
    fs::copy(fixture("valid_mug.json"), drafts.join("a.json")).unwrap();
    fs::copy(fixture("mrp_below.toml"), drafts.join("nested/b.toml")).unwrap();
    fs::write(drafts.join("README.md"), "not a draft").unwrap();

    draftcheck(&home)
        .args(["check", "drafts"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Checked 2 drafts: 1 valid, 1 invalid"));

    draftcheck(&home)
        .args(["check", "drafts", "--no-recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 1 draft: 1 valid, 0 invalid"));
}

#[test]
fn missing_path_exits_3() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["check", "no-such-drafts.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot read drafts"));
}

#[test]
fn malformed_document_exits_2() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("broken.json"), "{\"draft\": ").unwrap();

    draftcheck(&home)
        .args(["check", "broken.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed draft document"));
}

#[test]
fn unsupported_extension_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["check", ".", "--ext", "csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported extension 'csv'"));
}

#[test]
fn cost_price_flag_fills_empty_field() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["check", "--cost-price", "-1"])
        .arg(fixture("valid_mug.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "cost_price: Cost price cannot be negative",
        ));
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn local_config_defaults_apply() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".draftcheck.toml"),
        "[defaults]\ncompare_price = 1\n",
    )
    .unwrap();

    // The mug sets its own MRP, so only a draft without one is affected.
    fs::write(
        home.path().join("no_mrp.json"),
        r#"{"draft":{"title":"Tray","category_id":"kitchen","base_price":40,"description":"Oak"},"auxiliary":{"simple_fields":["Wood"]}}"#,
    )
    .unwrap();

    draftcheck(&home)
        .arg("check")
        .arg(fixture("valid_mug.json"))
        .arg("no_mrp.json")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "compare_price: MRP should be greater than or equal to selling price",
        ))
        .stdout(predicate::str::contains("Checked 2 drafts: 1 valid, 1 invalid"));
}

#[test]
fn environment_overrides_config() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .env("DRAFTCHECK__CHECK__FAIL_FAST", "true")
        .arg("check")
        .arg(fixture("batch.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Checked 2 drafts"));
}

#[test]
fn missing_explicit_config_exits_4() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["--config", "absent.toml", "rules"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_get_reads_value() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["config", "get", "check.extensions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json,toml"));
}

#[test]
fn config_get_unknown_key_exits_4() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["config", "get", "defaults.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_local_writes_config_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(".draftcheck.toml");

    draftcheck(&home)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(path.exists());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[check]"));

    // No terminal to ask on: the existing file is left alone.
    fs::write(&path, "# customised\n").unwrap();
    draftcheck(&home)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# customised\n");

    draftcheck(&home)
        .args(["init", "--local", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[defaults]"));
}

// ── rules / completions ───────────────────────────────────────────────────────

#[test]
fn rules_lists_every_message() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title must be less than 200 characters"))
        .stdout(predicate::str::contains("SKU must be less than 50 characters"))
        .stdout(predicate::str::contains("Product details are required"));
}

#[test]
fn rules_json_for_one_field() {
    let home = TempDir::new().unwrap();
    let assert = draftcheck(&home)
        .args(["rules", "--field", "comparePrice", "--format", "json"])
        .assert()
        .success();

    let rules: Vec<serde_json::Value> =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r["field"] == "compare_price"));
    assert!(rules.iter().any(|r| r["cross_field"] == true));
}

#[test]
fn rules_csv_for_one_field() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["rules", "--field", "sku", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "field,label,code,message,optional_field,cross_field\n",
        ))
        .stdout(predicate::str::contains(
            "\"SKU can only contain letters, numbers, hyphens, and underscores\"",
        ));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    draftcheck(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draftcheck"));
}
