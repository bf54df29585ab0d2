//! Black-box runs of the `salesbook` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn salesbook() -> Command {
    let mut cmd = Command::cargo_bin("salesbook").unwrap();
    cmd.env_remove("SALESBOOK_DATA_DIR")
        .env_remove("SALESBOOK_LOG_FORMAT");
    cmd
}

#[test]
fn help_works_with_bad_log_format_in_env() {
    salesbook()
        .env("SALESBOOK_LOG_FORMAT", "xml")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn bad_log_format_still_fails_real_commands() {
    let tmp = tempfile::tempdir().unwrap();
    salesbook()
        .env("SALESBOOK_LOG_FORMAT", "xml")
        .arg("--data-dir")
        .arg(tmp.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn data_dir_env_is_honored() {
    let tmp = tempfile::tempdir().unwrap();
    salesbook()
        .env("SALESBOOK_DATA_DIR", tmp.path())
        .args(["locations", "add", "--name", "Warehouse A", "--address", "123 St"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added location Warehouse A"));

    assert!(tmp.path().join("shipping_locations.json").exists());
}
