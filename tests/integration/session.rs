use crate::common::{
    make_temp_dir, normalized_lines, plain_text, read_log_contents, run_with_input,
    write_events, write_pinned_config,
};
use std::path::PathBuf;

fn setup(name: &str, file_logging: bool) -> PathBuf {
    let dir = make_temp_dir(name);
    write_pinned_config(&dir, file_logging);
    write_events(&dir);
    dir
}

#[test]
fn startup_draws_the_pinned_month() {
    let dir = setup("session-start", false);
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("A G E N D A"));
    assert!(stdout.contains("October 2023"));
    assert!(stdout.contains("Sun  Mon  Tue  Wed  Thu  Fri  Sat"));
    assert!(stdout.contains("15 •[16]  17   18 • 19"));
    assert!(stdout.contains("Selected: 2023-10-16 (Monday) | Today: 2023-10-16 | Range: ±3 day(s)"));
    assert!(stdout.contains("No events on this day."));
    assert!(stdout.contains("NEARBY (±3 DAYS)"));
    assert!(stdout.contains("Torneo de Tenis Amateur"));
    assert!(!stdout.contains("Maratón Ciudad 2023"));
}

#[test]
fn day_selects_and_lists_events() {
    let dir = setup("session-day", false);
    let output = run_with_input(&dir, "day 15\nexit\n");
    assert!(output.status.success());

    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("[15]•<16>"));
    assert!(stdout.contains("EVENTS ON 2023-10-15"));
    assert!(stdout.contains("Campeonato Nacional de Fútbol"));
    assert!(stdout.contains("Entrenamiento Equipo Juvenil"));
}

#[test]
fn range_widens_the_nearby_search() {
    let dir = setup("session-range", false);
    let output = run_with_input(&dir, "range 7\nexit\n");
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("NEARBY (±7 DAYS)"));
    assert!(stdout.contains("Maratón Ciudad 2023"));
    assert!(stdout.contains("In 6d"));
}

#[test]
fn month_navigation_redraws_other_months() {
    let dir = setup("session-nav", false);
    let output = run_with_input(&dir, "next\nprev\nprev\nexit\n");
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("November 2023"));
    assert!(stdout.contains("September 2023"));
}

#[test]
fn jump_selects_a_nearby_event_date() {
    let dir = setup("session-jump", false);
    // ±3 from the 16th lists both events of the 15th, then the 18th
    let output = run_with_input(&dir, "jump 3\nexit\n");
    let stdout = plain_text(&output.stdout);
    assert!(stdout.contains("EVENTS ON 2023-10-18"));
    assert!(stdout.contains("Selected: 2023-10-18 (Wednesday)"));
}

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = setup("session-unknown", false);
    let output = run_with_input(&dir, "frobnicate\nday 15\nexit\n");
    assert!(output.status.success());

    let stderr = normalized_lines(&output.stderr);
    let expected = "Unknown command: frobnicate. Type 'help' for the list of commands.";
    assert!(
        stderr.iter().any(|line| line == expected),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(plain_text(&output.stdout).contains("EVENTS ON 2023-10-15"));
}

#[test]
fn invalid_arguments_report_errors_and_usage() {
    let dir = setup("session-invalid", false);
    let output = run_with_input(&dir, "day 40\nrange\nexit\n");
    assert!(output.status.success());

    let stderr = normalized_lines(&output.stderr);
    assert!(stderr.iter().any(|l| {
        l == "Command 'day' failed. Invalid day 40 for 2023-10; the month has 31 day(s)."
    }));
    assert!(stderr
        .iter()
        .any(|l| l == "Command 'range' failed. Parse error: Missing argument."));
    assert!(stderr.iter().any(|l| l == "Usage: range <1|3|7>"));
}

#[test]
fn help_lists_commands() {
    let dir = setup("session-help", false);
    let output = run_with_input(&dir, "help\nday -h\nexit\n");
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "COMMANDS"));
    assert!(stdout.iter().any(|l| l.starts_with("range <1|3|7>")));
    assert!(stdout.iter().any(|l| l == "Usage: day <n>"));
}

#[test]
fn quit_and_eof_end_the_session() {
    let dir = setup("session-quit", false);
    let output = run_with_input(&dir, "quit\nday 15\n");
    assert!(output.status.success());
    assert!(!plain_text(&output.stdout).contains("EVENTS ON 2023-10-15"));

    let output = run_with_input(&dir, "");
    assert!(output.status.success());
}

#[test]
fn session_log_records_commands_and_transitions() {
    let dir = setup("session-log", true);
    let output = run_with_input(&dir, "day 15\nlog\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file");
    assert!(log.contains("INFO  Command run: day 15"));
    assert!(log.contains("DEBUG SelectDay(15)"));
    assert!(plain_text(&output.stdout).contains("Command run: log"));
}

#[test]
fn disabled_file_logging_writes_nothing() {
    let dir = setup("session-nolog", false);
    let output = run_with_input(&dir, "day 15\nlog\nexit\n");
    assert!(output.status.success());
    assert!(read_log_contents(&dir).is_none());
    assert!(normalized_lines(&output.stdout).iter().any(|l| l == "No logs"));
}
