use std::fs;

use agenda::calendar::DateKey;
use agenda::core::persist::load_event_index;

use crate::common::{
    EVENTS_JSON, make_temp_dir, normalized_lines, plain_text, run_with_args, run_with_input,
    write_pinned_config,
};

#[test]
fn sample_events_load_in_document_order() {
    let dir = make_temp_dir("persist-load");
    let path = dir.join("events.json");
    fs::write(&path, EVENTS_JSON).unwrap();

    let index = load_event_index(&path).unwrap();
    let keys: Vec<&str> = index.keys().map(DateKey::as_str).collect();
    assert_eq!(keys, ["2023-10-15", "2023-10-18", "2023-10-22"]);
    assert_eq!(index.total_events(), 4);
}

#[test]
fn missing_events_file_starts_empty_with_warning() {
    let dir = make_temp_dir("persist-missing");
    write_pinned_config(&dir, false);

    let output = run_with_input(&dir, "day 15\nexit\n");
    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr
            .iter()
            .any(|l| l == "Events file 'events.json' not found; starting with no events."),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(plain_text(&output.stdout).contains("No events on this day."));
}

#[test]
fn malformed_events_file_fails_startup() {
    let dir = make_temp_dir("persist-bad");
    write_pinned_config(&dir, false);
    fs::write(dir.join("events.json"), r#"{ "2023-10-5": [] }"#).unwrap();

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid events file 'events.json'"), "stderr: {stderr}");
    assert!(stderr.contains("2023-10-5"));
}

#[test]
fn events_path_can_be_overridden() {
    let dir = make_temp_dir("persist-flag");
    write_pinned_config(&dir, false);
    fs::create_dir_all(dir.join("data")).unwrap();
    fs::write(dir.join("data").join("october.json"), EVENTS_JSON).unwrap();

    let output = run_with_args(&dir, &["--events", "data/october.json"], "day 22\nexit\n");
    assert!(output.status.success());
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("Events path: data/october.json"));
    assert!(stdout.contains("Maratón Ciudad 2023"));
}
