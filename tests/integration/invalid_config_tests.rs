//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::check_config_command;

#[test]
fn test_toml_mismatch_type() {
    check_config_command("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_empty_widgets() {
    check_config_command("./tests/invalid_configs/empty_widgets.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one widget"));
}

#[test]
fn test_unknown_widget_type() {
    check_config_command("./tests/invalid_configs/unknown_widget_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn test_unknown_source() {
    check_config_command("./tests/invalid_configs/unknown_source.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'widgets[0].sources' refers to an unknown source 'ghost'",
        ));
}

#[test]
fn test_duplicate_source() {
    check_config_command("./tests/invalid_configs/duplicate_source.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'a' is used more than once"));
}

/// An attitude indicator needs both roll and pitch.
#[test]
fn test_wrong_source_count() {
    check_config_command("./tests/invalid_configs/wrong_source_count.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'widgets[0]'"))
        .stderr(predicate::str::contains("exactly 2 sources"));
}

#[test]
fn test_odd_cursor_sources() {
    check_config_command("./tests/invalid_configs/odd_cursor_sources.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("even number of sources"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    check_config_command("./tests/invalid_configs/invalid_colour_hex.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'styles.border_colour'"))
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_colour_name() {
    check_config_command("./tests/invalid_configs/invalid_colour_name.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fake blue' is an invalid named color"));
}

#[test]
fn test_small_config_rate() {
    check_config_command("./tests/invalid_configs/small_rate.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'general.rate' must be at least 10ms"));
}

#[test]
fn test_bad_range() {
    check_config_command("./tests/invalid_configs/bad_range.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'widgets[0].y_range'"));
}

#[test]
fn test_bad_group_direction() {
    check_config_command("./tests/invalid_configs/bad_group_direction.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'widgets[0].direction'"));
}

#[test]
fn test_huge_trail_length() {
    check_config_command("./tests/invalid_configs/huge_trail_length.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'widgets[0].trail_length'"));
}

#[test]
fn test_huge_chart_window() {
    check_config_command("./tests/invalid_configs/huge_chart_window.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'widgets[0].window'"));
}
