use super::command_parser::CommandParser;
use super::command_resolver::{CommandResolver, GlobalResolver, NavigateResolver};
use crate::command::commands::HelpCommand;
use crate::core::context::AppContext;
use crate::core::types::{CalendarCommand, RangeDays};
use crate::errors::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_ctx() -> AppContext {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir: PathBuf = std::env::temp_dir().join(format!("agenda-command-{nanos}-{uniq}"));
    fs::create_dir_all(&dir).unwrap();

    let config_path = dir.join("config.json");
    fs::write(
        &config_path,
        r#"{
  "default_range": { "value": "3", "description": "radius" },
  "today": { "value": "2023-10-16", "description": "today" },
  "file_logging_enabled": { "value": "False", "description": "file logging" }
}"#,
    )
    .unwrap();
    let events_path = dir.join("events.json");
    fs::write(
        &events_path,
        r#"{
  "2023-10-18": [
    { "id": "3", "title": "Torneo de Tenis", "time": "9:00 AM", "location": "Club" }
  ],
  "2023-12-25": [
    { "id": "9", "title": "Navidad", "time": "8:00 PM", "location": "Casa" }
  ]
}"#,
    )
    .unwrap();
    AppContext::new_with_paths(config_path, events_path, dir.join("logs")).unwrap()
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn run(ctx: &mut AppContext, line: &str) -> crate::errors::Result<bool> {
    let (name, argv) = CommandParser::split(line);
    let cmd = CommandParser::new().parse(&name, &argv)?;
    cmd.execute(ctx)
}

// ---------- command_parser.rs ----------
#[test]
fn split_separates_command_and_args() {
    let (cmd, argv) = CommandParser::split("  select   12/25  ");
    assert_eq!(cmd, "select");
    assert_eq!(argv, ["12/25"]);

    let (cmd, argv) = CommandParser::split("");
    assert!(cmd.is_empty());
    assert!(argv.is_empty());
}

#[test]
fn parser_resolves_every_command_name() {
    let parser = CommandParser::new();
    for c in CalendarCommand::iter() {
        let cmd = parser.parse(c.as_ref(), &[]).unwrap();
        assert_eq!(cmd.usage(), c.usage().to_string());
    }
    assert!(parser.parse("PREVIOUS", &[]).is_ok());
    assert!(parser.parse("Next7", &[]).is_ok());
}

#[test]
fn parser_rejects_unknown_commands() {
    match CommandParser::new().parse("frobnicate", &[]) {
        Err(Error::UnknownCommand(name)) => assert_eq!(name, "frobnicate"),
        _ => panic!("expected unknown command"),
    }
}

// ---------- command_resolver.rs ----------
#[test]
fn resolvers_split_navigation_from_the_rest() {
    assert!(NavigateResolver.can_resolve("prev"));
    assert!(NavigateResolver.can_resolve("previous"));
    assert!(!NavigateResolver.can_resolve("next7"));

    assert!(GlobalResolver.can_resolve("next7"));
    assert!(GlobalResolver.can_resolve("jump"));
    assert!(!GlobalResolver.can_resolve("previous"));

    let argv = args(&[]);
    assert!(matches!(
        NavigateResolver.resolve("today", &argv),
        Err(Error::UnknownCommand(_))
    ));
}

// ---------- commands.rs ----------
#[test]
fn navigation_commands_move_the_visible_month() {
    let mut ctx = make_ctx();
    assert!(run(&mut ctx, "prev").unwrap());
    assert_eq!(ctx.state.visible_month, 8);
    run(&mut ctx, "next").unwrap();
    run(&mut ctx, "next").unwrap();
    assert_eq!(ctx.state.visible_month, 10);
    assert_eq!(ctx.state.selected_date.to_string(), "2023-10-16");
}

#[test]
fn select_keeps_view_for_visible_dates() {
    let mut ctx = make_ctx();
    run(&mut ctx, "next").unwrap();
    run(&mut ctx, "select 2023-11-05").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-11-05");
    assert_eq!(ctx.state.visible_month, 10);
}

#[test]
fn select_brings_other_months_into_view() {
    let mut ctx = make_ctx();
    run(&mut ctx, "select 12/25").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-12-25");
    assert_eq!(ctx.state.visible_month, 11);
    assert_eq!(ctx.view().unwrap().selected_events[0].title, "Navidad");
}

#[test]
fn select_rejects_unparseable_dates() {
    let mut ctx = make_ctx();
    let before = ctx.state;
    match run(&mut ctx, "select 2023-02-30").unwrap_err() {
        Error::Parse(msg) => assert!(msg.contains("Invalid date format")),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(ctx.state, before);
}

#[test]
fn day_and_range_validate_arguments() {
    let mut ctx = make_ctx();
    run(&mut ctx, "day 31").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-10-31");

    assert!(matches!(
        run(&mut ctx, "day 0").unwrap_err(),
        Error::InvalidDay { day: 0, .. }
    ));
    match run(&mut ctx, "day x").unwrap_err() {
        Error::Parse(msg) => {
            assert!(msg.contains("Invalid day number: 'x'"));
            assert!(msg.contains("\nUsage: day <n>"));
        }
        other => panic!("unexpected {other:?}"),
    }

    run(&mut ctx, "range 7").unwrap();
    assert_eq!(ctx.state.range_days, RangeDays::Seven);
    assert!(matches!(
        run(&mut ctx, "range 2").unwrap_err(),
        Error::InvalidRange(r) if r == "2"
    ));
    assert_eq!(ctx.state.range_days, RangeDays::Seven);
}

#[test]
fn missing_and_extra_arguments_report_usage() {
    let mut ctx = make_ctx();
    match run(&mut ctx, "range").unwrap_err() {
        Error::Parse(msg) => assert_eq!(msg, "Missing argument.\nUsage: range <1|3|7>"),
        other => panic!("unexpected {other:?}"),
    }
    match run(&mut ctx, "today now").unwrap_err() {
        Error::Parse(msg) => assert!(msg.starts_with("Expected at most 0 argument(s), got 1.")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn help_flag_short_circuits_without_running() {
    let mut ctx = make_ctx();
    let before = ctx.state;
    assert!(!run(&mut ctx, "day -h").unwrap());
    assert!(!run(&mut ctx, "next --help").unwrap());
    assert_eq!(ctx.state, before);
}

#[test]
fn quick_commands_move_relative_to_today() {
    let mut ctx = make_ctx();
    run(&mut ctx, "tomorrow").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-10-17");

    run(&mut ctx, "prev").unwrap();
    run(&mut ctx, "next7").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-10-16");
    assert_eq!(ctx.state.visible_month, 9);
    assert_eq!(ctx.state.range_days, RangeDays::Seven);
}

#[test]
fn jump_follows_the_nearby_list() {
    let mut ctx = make_ctx();
    run(&mut ctx, "jump 1").unwrap();
    assert_eq!(ctx.state.selected_date.to_string(), "2023-10-18");

    match run(&mut ctx, "jump 2").unwrap_err() {
        Error::Parse(msg) => assert_eq!(msg, "No nearby event #2; 0 listed."),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(run(&mut ctx, "jump 0").unwrap_err(), Error::Parse(_)));
}

#[test]
fn show_and_help_report_redraw_needs() {
    let mut ctx = make_ctx();
    assert!(run(&mut ctx, "show").unwrap());
    assert!(!run(&mut ctx, "help").unwrap());
    assert!(!run(&mut ctx, "log").unwrap());
}

#[test]
fn help_rows_list_every_command_then_exit() {
    let rows = HelpCommand::rows();
    assert_eq!(rows.len(), CalendarCommand::iter().count() + 1);
    assert_eq!(rows[0], ["prev", "Show the previous month"]);
    assert_eq!(rows.last().unwrap()[0], "exit");
}
