//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("formatrelay")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatrelay runs the right external formatter"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("formatrelay")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("formatrelay")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("formatrelay")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_format_help() {
    cargo_bin_cmd!("formatrelay")
        .args(["format", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format a file with the external formatter"));
}

#[test]
fn test_format_requires_file() {
    cargo_bin_cmd!("formatrelay")
        .arg("format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn test_on_save_help() {
    cargo_bin_cmd!("formatrelay")
        .args(["on-save", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on_save"));
}
