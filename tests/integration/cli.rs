use agenda::core::cli::{CliPaths, USAGE};
use std::path::PathBuf;

use crate::common::{make_temp_dir, run_with_args, write_pinned_config};

#[test]
fn help_flag_prints_usage_and_exits() {
    let dir = make_temp_dir("cli-help");
    let output = run_with_args(&dir, &["-h"], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), USAGE);
    // nothing is created when only asking for help
    assert!(!dir.join("config.json").exists());
}

#[test]
fn unknown_flag_fails_with_usage() {
    let dir = make_temp_dir("cli-unknown");
    let output = run_with_args(&dir, &["--bogus"], "");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --bogus"));
    assert!(stderr.contains(USAGE));
}

#[test]
fn config_and_logs_paths_are_honored() {
    let dir = make_temp_dir("cli-paths");
    fs_setup(&dir);

    let output = run_with_args(
        &dir,
        &["--config", "conf/agenda.json", "--logs", "out/logs"],
        "day 15\nexit\n",
    );
    assert!(output.status.success());
    assert!(dir.join("out").join("logs").is_dir());
    assert!(!dir.join("config.json").exists());
}

fn fs_setup(dir: &std::path::Path) {
    let conf = dir.join("conf");
    std::fs::create_dir_all(&conf).unwrap();
    write_pinned_config(&conf, true);
    std::fs::rename(conf.join("config.json"), conf.join("agenda.json")).unwrap();
}

#[test]
fn paths_parse_from_args() {
    let args = ["--logs", "/tmp/agenda-logs"].into_iter().map(String::from);
    let paths = CliPaths::from_args(args).unwrap();
    assert_eq!(paths.logs_dir, PathBuf::from("/tmp/agenda-logs"));
    assert_eq!(paths.config_path, PathBuf::from("config.json"));
    assert_eq!(paths.events_path, PathBuf::from("events.json"));
}
