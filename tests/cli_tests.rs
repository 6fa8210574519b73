//! Command-line tests for the draftpick binary
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn draftpick() -> Command {
    Command::cargo_bin("draftpick").unwrap()
}

#[test]
fn test_help_lists_options() {
    draftpick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--side"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    draftpick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_side_is_rejected() {
    draftpick()
        .args(["--side", "spectator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown side"));
}

#[test]
fn test_missing_catalog_file_is_fatal() {
    draftpick()
        .args(["--catalog", "/nonexistent/heroStats.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hero catalog unavailable"));
}

#[test]
fn test_empty_catalog_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();

    draftpick()
        .arg("--catalog")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hero catalog unavailable"));
}

#[test]
fn test_malformed_catalog_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();

    draftpick()
        .arg("--catalog")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hero catalog unavailable"));
}
