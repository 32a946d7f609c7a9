//! Valid configs are checked with `--check_config`, which builds every source
//! and widget and then exits without touching the terminal.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{check_config_command, ewmon_command};

#[test]
fn test_minimal() {
    check_config_command("./tests/valid_configs/minimal.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Config OK: 1 source(s), 1 top-level widget(s), 1 widget(s) in total.",
        ));
}

#[test]
fn test_all_widgets() {
    check_config_command("./tests/valid_configs/all_widgets.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Config OK: 6 source(s), 2 top-level widget(s), 7 widget(s) in total.",
        ));
}

#[test]
fn test_creates_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ewmon").join("ewmon.toml");
    let path_str = path.to_str().unwrap();

    ewmon_command(&["--check_config", "-C", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK: 6 source(s), 2 top-level widget(s)"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[[sources]]"));
    assert!(written.contains("[[widgets]]"));
}
