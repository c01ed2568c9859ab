use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_agenda"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "agenda-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Config pinned to 2023-10-16 so output does not depend on the clock.
pub fn write_pinned_config(dir: &Path, file_logging: bool) {
    let logging = if file_logging { "True" } else { "False" };
    let cfg = format!(
        r#"{{
      "default_range": {{ "value": "3", "description": "radius" }},
      "week_start": {{ "value": "sunday", "description": "first column" }},
      "today": {{ "value": "2023-10-16", "description": "today" }},
      "file_logging_enabled": {{ "value": "{logging}", "description": "file logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub const EVENTS_JSON: &str = r#"{
  "2023-10-15": [
    { "id": "1", "title": "Campeonato Nacional de Fútbol", "time": "3:00 PM", "location": "Estadio Nacional" },
    { "id": "2", "title": "Entrenamiento Equipo Juvenil", "time": "5:00 PM", "location": "Cancha Municipal" }
  ],
  "2023-10-18": [
    { "id": "3", "title": "Torneo de Tenis Amateur", "time": "9:00 AM", "location": "Club de Tenis" }
  ],
  "2023-10-22": [
    { "id": "4", "title": "Maratón Ciudad 2023", "time": "7:00 AM", "location": "Plaza Central" }
  ]
}"#;

pub fn write_events(dir: &Path) {
    fs::write(dir.join("events.json"), EVENTS_JSON).unwrap();
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // the binary may exit before reading everything
    let _ = child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }
    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            match trimmed.strip_prefix('>') {
                Some(rest) => rest.trim().to_string(),
                None => trimmed.to_string(),
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn plain_text(buf: &[u8]) -> String {
    normalized_lines(buf).join("\n")
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
