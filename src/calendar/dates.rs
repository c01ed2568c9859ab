use crate::errors::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::types::WeekStart;

/// Smallest year a four-digit key can hold.
pub const MIN_YEAR: i32 = 1;
/// Largest year a four-digit key can hold.
pub const MAX_YEAR: i32 = 9999;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day with no time-of-day and no zone.
///
/// Backed by `NaiveDate`, so day arithmetic is plain integer math on the
/// proleptic Gregorian calendar and never shifts with the host's local offset
/// or daylight-saving rules. Months are exposed zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let days = days_in_month(year, month)?;
        if day == 0 || day > days {
            return Err(Error::InvalidDay {
                year,
                month,
                day,
                days_in_month: days,
            });
        }
        // validated above, so the constructor cannot reject it
        NaiveDate::from_ymd_opt(year, month + 1, day)
            .map(CalendarDate)
            .ok_or(Error::InvalidDay {
                year,
                month,
                day,
                days_in_month: days,
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0..=11).
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn key(&self) -> DateKey {
        to_key(*self)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        check_year(date.year())?;
        Ok(CalendarDate(date))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_key(s)
    }
}

/// Canonical `YYYY-MM-DD` lookup key. Only `to_key` and `DateKey::parse`
/// build one, so every key in circulation parses back to its date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn parse(s: &str) -> Result<Self> {
        from_key(s).map(to_key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn date(&self) -> Result<CalendarDate> {
        from_key(&self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateKey, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::InvalidYear(year))
    }
}

fn check_month(month: u32) -> Result<()> {
    if month <= 11 {
        Ok(())
    } else {
        Err(Error::InvalidMonth(month))
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a zero-based month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    check_year(year)?;
    check_month(month)?;
    let days = match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    };
    Ok(days)
}

/// Weekday of the 1st of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> Result<u32> {
    first_weekday_from(year, month, WeekStart::Sunday)
}

/// Weekday of the 1st of the month, counted from `week_start`.
pub fn first_weekday_from(year: i32, month: u32, week_start: WeekStart) -> Result<u32> {
    let first = CalendarDate::new(year, month, 1)?;
    Ok(week_start.column_of(first.0.weekday()))
}

pub fn to_key(date: CalendarDate) -> DateKey {
    DateKey(date.to_string())
}

/// Parse a `YYYY-MM-DD` key. Anything else, including impossible dates such
/// as `2023-02-30`, is `InvalidDateKey`.
pub fn from_key(key: &str) -> Result<CalendarDate> {
    let invalid = || Error::InvalidDateKey(key.to_string());
    let bytes = key.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    let year: i32 = key[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = key[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = key[8..10].parse().map_err(|_| invalid())?;
    if month == 0 {
        return Err(invalid());
    }
    CalendarDate::new(year, month - 1, day).map_err(|_| invalid())
}

/// Shift by a signed number of days. Fails with `InvalidYear` only when the
/// result leaves the four-digit year range.
pub fn add_days(date: CalendarDate, n: i64) -> Result<CalendarDate> {
    let shifted = Duration::try_days(n)
        .and_then(|d| date.0.checked_add_signed(d))
        .ok_or(Error::InvalidYear(if n < 0 { MIN_YEAR - 1 } else { MAX_YEAR + 1 }))?;
    CalendarDate::try_from(shifted)
}

/// Signed whole-day difference `a - b`.
pub fn day_difference(a: CalendarDate, b: CalendarDate) -> i64 {
    (a.0 - b.0).num_days()
}
