use crate::calendar::dates::CalendarDate;
use crate::core::types::{Bool, PinnedDate, RangeDays, WeekStart};
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultRangeConfigItem {
    pub value: RangeDays,
    pub description: String,
}

impl Default for DefaultRangeConfigItem {
    fn default() -> Self {
        Self {
            value: RangeDays::Three,
            description: "Days around the selection searched for nearby events.".into(),
        }
    }
}

impl ConfigItem<RangeDays> for DefaultRangeConfigItem {
    fn get_value(&self) -> &RangeDays {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = RangeDays::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStartConfigItem {
    pub value: WeekStart,
    pub description: String,
}

impl Default for WeekStartConfigItem {
    fn default() -> Self {
        Self {
            value: WeekStart::Sunday,
            description: "First column of the month grid.".into(),
        }
    }
}

impl ConfigItem<WeekStart> for WeekStartConfigItem {
    fn get_value(&self) -> &WeekStart {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = WeekStart::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayConfigItem {
    #[serde(default)]
    pub value: PinnedDate,
    pub description: String,
}

impl Default for TodayConfigItem {
    fn default() -> Self {
        Self {
            value: PinnedDate(None),
            description: "Pin today's date (YYYY-MM-DD); empty uses the system clock.".into(),
        }
    }
}

impl ConfigItem<PinnedDate> for TodayConfigItem {
    fn get_value(&self) -> &PinnedDate {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() || trimmed == "-" {
            self.value = PinnedDate(None);
            return Ok(());
        }
        self.value = PinnedDate(Some(CalendarDate::from_str(trimmed)?));
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
