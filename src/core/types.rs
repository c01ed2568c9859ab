use crate::calendar::dates::CalendarDate;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Search radius of the nearby-events query. Closed set, so a `ViewState`
/// can never carry anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIterDerive,
)]
pub enum RangeDays {
    #[strum(serialize = "±1", to_string = "1")]
    One,
    #[default]
    #[strum(serialize = "±3", to_string = "3")]
    Three,
    #[strum(serialize = "±7", to_string = "7")]
    Seven,
}

impl RangeDays {
    pub fn days(self) -> i64 {
        match self {
            RangeDays::One => 1,
            RangeDays::Three => 3,
            RangeDays::Seven => 7,
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::InvalidRange(s.trim().to_string()))
    }
}

impl Serialize for RangeDays {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for RangeDays {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<RangeDays, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        RangeDays::try_from(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MonthDirection {
    #[strum(serialize = "prev", serialize = "previous", to_string = "prev")]
    Prev,
    #[strum(serialize = "next", to_string = "next")]
    Next,
}

/// Which weekday occupies grid column 0.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    #[strum(serialize = "sunday", serialize = "sun", to_string = "sunday")]
    Sunday,
    #[strum(serialize = "monday", serialize = "mon", to_string = "monday")]
    Monday,
}

impl WeekStart {
    pub fn help(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "Weeks start on Sunday (column 0 is Sunday).",
            WeekStart::Monday => "Weeks start on Monday (column 0 is Monday).",
        }
    }

    /// Grid column (0..=6) of `weekday` under this week start.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Short day names in column order.
    pub fn day_names(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid week start: '{}'. Valid values: {}",
                s.trim(),
                valid_csv::<WeekStart>()
            ))
        })
    }
}

/// User-typed date, accepted in a handful of layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInput(pub CalendarDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%m-%d")]
    MdDash,
}

impl DateFormat {
    /// `%m-%d` has no year; borrow it from `today`.
    fn complete(self, input: &str, today: CalendarDate) -> (String, DateFormat) {
        match self {
            DateFormat::MdDash => (format!("{:04}-{input}", today.year()), DateFormat::YmdDash),
            other => (input.to_owned(), other),
        }
    }

    /// Years are always written out in four digits; chrono alone would take "03" as year 3.
    fn has_full_year(self, text: &str) -> bool {
        let year = match self {
            DateFormat::YmdDash => text.split('-').next(),
            DateFormat::MdYDash => text.rsplit('-').next(),
            DateFormat::MdDash => return true,
        };
        year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl DateInput {
    pub fn usage(today: CalendarDate) -> String {
        let sample = today.naive();
        let formats = DateFormat::iter()
            .map(|df| sample.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {} ('/' also accepted)", formats)
    }

    pub fn try_from_str(input: &str, today: CalendarDate) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let (text, format) = f.complete(&input, today);
            if !format.has_full_year(&text) {
                continue;
            }
            if let Ok(date) = NaiveDate::parse_from_str(&text, format.as_ref()) {
                return CalendarDate::try_from(date).map(DateInput);
            }
        }

        Err(Error::Parse(format!(
            "Invalid date format: '{}'. {}",
            input,
            Self::usage(today)
        )))
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional pinned "today" stored in config as `YYYY-MM-DD` or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinnedDate(pub Option<CalendarDate>);

impl fmt::Display for PinnedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{date}"),
            None => write!(f, "-"),
        }
    }
}

impl Serialize for PinnedDate {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for PinnedDate {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<PinnedDate, <D as Deserializer<'de>>::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(PinnedDate(None)),
            Some(s) if s.trim().is_empty() => Ok(PinnedDate(None)),
            Some(s) => CalendarDate::from_str(s.trim())
                .map(|d| PinnedDate(Some(d)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Every command the interactive session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CalendarCommand {
    Prev,
    Next,
    Select,
    Day,
    Range,
    Today,
    Tomorrow,
    Next7,
    Jump,
    Show,
    Config,
    Log,
    Help,
}

impl CalendarCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::unknown(s.trim()))
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CalendarCommand::Prev => "prev",
            CalendarCommand::Next => "next",
            CalendarCommand::Select => "select <date>",
            CalendarCommand::Day => "day <n>",
            CalendarCommand::Range => "range <1|3|7>",
            CalendarCommand::Today => "today",
            CalendarCommand::Tomorrow => "tomorrow",
            CalendarCommand::Next7 => "next7",
            CalendarCommand::Jump => "jump <n>",
            CalendarCommand::Show => "show",
            CalendarCommand::Config => "config",
            CalendarCommand::Log => "log",
            CalendarCommand::Help => "help",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CalendarCommand::Prev => "Show the previous month",
            CalendarCommand::Next => "Show the next month",
            CalendarCommand::Select => "Select a date (YYYY-MM-DD, MM-DD-YYYY or MM-DD)",
            CalendarCommand::Day => "Select day n of the visible month",
            CalendarCommand::Range => "Set the nearby search radius in days",
            CalendarCommand::Today => "Select today",
            CalendarCommand::Tomorrow => "Select tomorrow",
            CalendarCommand::Next7 => "Select today and search 7 days around it",
            CalendarCommand::Jump => "Select the date of nearby event n",
            CalendarCommand::Show => "Redraw the calendar",
            CalendarCommand::Config => "View and edit configuration",
            CalendarCommand::Log => "Print the session log",
            CalendarCommand::Help => "List commands",
        }
    }
}
