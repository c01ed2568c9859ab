use std::path::PathBuf;

pub const USAGE: &str = "Usage: agenda [--config <file>] [--events <file>] [--logs <dir>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub events_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut paths = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => paths.config_path = Self::next_path(&mut args, "--config")?,
                "--events" => paths.events_path = Self::next_path(&mut args, "--events")?,
                "--logs" => paths.logs_dir = Self::next_path(&mut args, "--logs")?,
                _ => return Err(format!("Unknown argument: {arg}\n{USAGE}")),
            }
        }
        Ok(paths)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .filter(|value| !value.starts_with("--"))
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}\n{USAGE}"))
    }
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            events_path: PathBuf::from("events.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}
