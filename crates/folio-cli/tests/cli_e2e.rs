#![allow(deprecated)]

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.env_remove("FOLIO_CONFIG")
        .env_remove("FOLIO_MAX_LENGTH")
        .env_remove("FOLIO_PAGE_SIZE")
        .env_remove("FOLIO_WINDOW_POLICY")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn window_prints_table() {
    folio_cmd()
        .args(["window", "--current", "4", "--last", "20"])
        .assert()
        .success()
        .stdout("1 2 3 [4] 5 … 20\n");
}

#[test]
fn window_prints_json() {
    folio_cmd()
        .args(["--format", "json", "window", "--current", "17", "--last", "20"])
        .assert()
        .success()
        .stdout("[1,null,16,17,18,19,20]\n");
}

#[test]
fn clamp_policy_brackets_clamped_page() {
    folio_cmd()
        .args(["window", "--current", "99", "--last", "20", "--policy", "clamp"])
        .assert()
        .success()
        .stdout("1 2 3 … 18 19 [20]\n");
}

#[test]
fn strict_policy_exits_with_validation_code() {
    folio_cmd()
        .args([
            "window",
            "--current",
            "1",
            "--last",
            "20",
            "--max-length",
            "3",
            "--policy",
            "strict",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below the minimum of 5"));
}

#[test]
fn settings_file_and_env_are_layered() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pagination.json");
    fs::write(&path, r#"{ "page_size": 10, "max_length": 9 }"#).unwrap();

    folio_cmd()
        .env("FOLIO_CONFIG", path.as_os_str())
        .args(["pages", "--total-items", "95"])
        .assert()
        .success()
        .stdout("10\n");

    folio_cmd()
        .env("FOLIO_CONFIG", path.as_os_str())
        .env("FOLIO_PAGE_SIZE", "50")
        .args(["pages", "--total-items", "95"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn missing_settings_file_is_a_failure() {
    let temp = TempDir::new().unwrap();
    folio_cmd()
        .args(["--config"])
        .arg(temp.path().join("absent.json"))
        .args(["pages", "--total-items", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to read settings file"));
}

#[test]
fn invalid_settings_value_is_a_validation_error() {
    folio_cmd()
        .env("FOLIO_MAX_LENGTH", "2")
        .args(["window", "--current", "1", "--last", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_length"));
}
