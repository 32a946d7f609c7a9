//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::ewmon_command;

const MINIMAL: &str = "./tests/valid_configs/minimal.toml";

#[test]
fn test_small_rate() {
    ewmon_command(&["--check_config", "-C", MINIMAL])
        .arg("-r")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' must be at least 10ms"));
}

#[test]
fn test_large_rate() {
    ewmon_command(&["--check_config", "-C", MINIMAL])
        .arg("-r")
        .arg("1000000000 years")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' must be at most"));
}

#[test]
fn test_invalid_rate() {
    ewmon_command(&["--check_config", "-C", MINIMAL])
        .arg("-r")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--rate' was set with an invalid value",
        ));
}

#[test]
fn test_rate_overrides_config() {
    ewmon_command(&["--check_config", "-C", "./tests/invalid_configs/small_rate.toml"])
        .arg("--rate")
        .arg("1s")
        .assert()
        .success();
}

#[test]
fn test_unknown_flag() {
    ewmon_command(&["--gpu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_version() {
    ewmon_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ewmon"));
}

#[test]
fn test_help() {
    ewmon_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General Options"))
        .stdout(predicate::str::contains("--check_config"));
}
