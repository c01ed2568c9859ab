pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::calendar::dates::CalendarDate;
use crate::config::models::{
    ConfigItem, DefaultRangeConfigItem, FileLoggingConfigItem, TodayConfigItem,
    WeekStartConfigItem,
};
use crate::core::types::{RangeDays, WeekStart};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    DefaultRange,
    WeekStart,
    Today,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_range: DefaultRangeConfigItem,
    #[serde(default)]
    pub week_start: WeekStartConfigItem,
    #[serde(default)]
    pub today: TodayConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {e}", path.display())))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Load `path`, writing a default config there first when it is missing.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load_from(path);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let cfg = Self {
            path: path.to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        };
        cfg.save()?;
        Ok(cfg)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn default_range(&self) -> RangeDays {
        *self.data.default_range.get_value()
    }
    pub fn week_start(&self) -> WeekStart {
        *self.data.week_start.get_value()
    }
    pub fn pinned_today(&self) -> Option<CalendarDate> {
        self.data.today.get_value().0
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DefaultRange => self.data.default_range.description(),
            ConfigKey::WeekStart => self.data.week_start.description(),
            ConfigKey::Today => self.data.today.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DefaultRange => self.data.default_range.get_value().to_string(),
            ConfigKey::WeekStart => self.data.week_start.get_value().to_string(),
            ConfigKey::Today => self.data.today.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        let rows = ConfigKey::iter()
            .map(|key| {
                (
                    key.to_string(),
                    self.description_of(key).to_string(),
                    self.value_of(key),
                )
            })
            .collect();
        ConfigRows(rows)
    }

    pub fn set_by_index(&mut self, index: usize, new_value: &str) -> Result<()> {
        let key = ConfigKey::iter()
            .nth(index)
            .ok_or_else(|| Error::Parse(format!("Invalid ID: {index}")))?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.value_of(key);
        self.edit(|cfg| Self::apply(cfg, key, new_value))?;
        // stash for the caller to log
        self.last_change = Some((key.to_string(), old, self.value_of(key)));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = Self::parse_key(key_str)?;
        self.set_key(key, new_value)
    }

    /// Apply several edits; nothing is written unless all of them parse.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut staged = self.data.clone();
        for (k, v) in pairs {
            let key = Self::parse_key(k.as_ref())?;
            Self::apply(&mut staged, key, v.as_ref())?;
        }
        self.data = staged;
        self.save()
    }

    fn parse_key(key_str: &str) -> Result<ConfigKey> {
        ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })
    }

    fn apply(cfg: &mut ConfigFile, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DefaultRange => cfg.default_range.set_value(value),
            ConfigKey::WeekStart => cfg.week_start.set_value(value),
            ConfigKey::Today => cfg.today.set_value(value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(value),
        }
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {e}", self.path.display())))
    }
}
