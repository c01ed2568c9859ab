use std::fs;

use agenda::config::Config;
use agenda::core::types::{RangeDays, WeekStart};

use crate::common::{
    make_temp_dir, normalized_lines, plain_text, run_with_input, write_events,
    write_pinned_config,
};

#[test]
fn config_command_shows_the_table() {
    let dir = make_temp_dir("config-show");
    write_pinned_config(&dir, false);
    write_events(&dir);

    let output = run_with_input(&dir, "config\nN\nexit\n");
    assert!(output.status.success());
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("DEFAULT_RANGE"));
    assert!(stdout.contains("2023-10-16"));
}

#[test]
fn config_edit_persists_range_change() {
    let dir = make_temp_dir("config-range");
    write_pinned_config(&dir, false);
    write_events(&dir);

    let output = run_with_input(&dir, "config\ny\n0\n7\nn\nexit\n");
    assert!(output.status.success());
    assert!(plain_text(&output.stdout).contains("Updated DEFAULT_RANGE."));

    let config = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(config.default_range(), RangeDays::Seven);
    assert_eq!(config.week_start(), WeekStart::Sunday);
}

#[test]
fn config_edit_rejects_bad_values_and_keeps_asking() {
    let dir = make_temp_dir("config-bad");
    write_pinned_config(&dir, false);
    write_events(&dir);

    let output = run_with_input(&dir, "config\ny\n1\nfriday\nmonday\nn\nexit\n");
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l.starts_with("Error: ")));

    let config = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(config.week_start(), WeekStart::Monday);
    // the redrawn grid now starts on Monday
    assert!(plain_text(&output.stdout).contains("Mon  Tue  Wed  Thu  Fri  Sat  Sun"));
}

#[test]
fn pinning_today_moves_the_calendar() {
    let dir = make_temp_dir("config-today");
    write_pinned_config(&dir, false);
    write_events(&dir);

    let output = run_with_input(&dir, "config\ny\n2\n2024-02-29\nn\nexit\n");
    assert!(output.status.success());
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("February 2024"));
    assert!(stdout.contains("Selected: 2024-02-29 (Thursday) | Today: 2024-02-29"));
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = make_temp_dir("config-create");
    write_events(&dir);

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let path = dir.join("config.json");
    assert!(path.exists());
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_range(), RangeDays::Three);
    assert_eq!(config.week_start(), WeekStart::Sunday);
    assert!(config.pinned_today().is_none());
}

#[test]
fn invalid_config_fails_startup() {
    let dir = make_temp_dir("config-invalid");
    fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON in 'config.json'"), "stderr: {stderr}");
}

#[test]
fn unsupported_range_in_config_fails_startup() {
    let dir = make_temp_dir("config-range-bad");
    fs::write(
        dir.join("config.json"),
        r#"{ "default_range": { "value": "5", "description": "radius" } }"#,
    )
    .unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid range: '5'"));
}
