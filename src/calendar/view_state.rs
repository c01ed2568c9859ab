use crate::calendar::dates::{CalendarDate, add_days, days_in_month};
use crate::core::types::{MonthDirection, RangeDays};
use crate::errors::Result;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Selection, visible month and radius. Everything the calendar screen shows
/// is derived from these four fields.
///
/// Transitions take `self` by value and return the next snapshot; none of
/// them reads a clock, "today" is always passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub selected_date: CalendarDate,
    pub visible_year: i32,
    /// Zero-based (0..=11).
    pub visible_month: u32,
    pub range_days: RangeDays,
}

impl ViewState {
    /// Opening snapshot: today selected and visible, default radius.
    pub fn new(today: CalendarDate) -> Self {
        Self::with_range(today, RangeDays::default())
    }

    pub fn with_range(today: CalendarDate, range_days: RangeDays) -> Self {
        Self {
            selected_date: today,
            visible_year: today.year(),
            visible_month: today.month(),
            range_days,
        }
    }

    /// Select a date without moving the visible month.
    pub fn select_date(self, date: CalendarDate) -> Self {
        Self {
            selected_date: date,
            ..self
        }
    }

    /// Select a numbered cell of the visible month.
    pub fn select_day(self, day: u32) -> Result<Self> {
        let date = CalendarDate::new(self.visible_year, self.visible_month, day)?;
        Ok(self.select_date(date))
    }

    pub fn navigate_month(self, direction: MonthDirection) -> Self {
        let (visible_year, visible_month) = match (direction, self.visible_month) {
            (MonthDirection::Prev, 0) => (self.visible_year - 1, 11),
            (MonthDirection::Prev, m) => (self.visible_year, m - 1),
            (MonthDirection::Next, 11) => (self.visible_year + 1, 0),
            (MonthDirection::Next, m) => (self.visible_year, m + 1),
        };
        Self {
            visible_year,
            visible_month,
            ..self
        }
    }

    pub fn set_range(self, range_days: RangeDays) -> Self {
        Self { range_days, ..self }
    }

    /// Select `date` and bring its month into view.
    pub fn jump_to(self, date: CalendarDate) -> Self {
        Self {
            selected_date: date,
            visible_year: date.year(),
            visible_month: date.month(),
            ..self
        }
    }

    pub fn go_today(self, today: CalendarDate) -> Self {
        self.jump_to(today)
    }

    /// On the last representable day there is no tomorrow; the selection
    /// stays on `today`.
    pub fn go_tomorrow(self, today: CalendarDate) -> Self {
        let tomorrow = add_days(today, 1).unwrap_or(today);
        self.jump_to(tomorrow)
    }

    /// Widen to seven days and center on today, as one transition.
    pub fn go_next7(self, today: CalendarDate) -> Self {
        self.set_range(RangeDays::Seven).go_today(today)
    }

    pub fn apply_quick_filter(self, filter: QuickFilter, today: CalendarDate) -> Self {
        match filter {
            QuickFilter::Today => self.go_today(today),
            QuickFilter::Tomorrow => self.go_tomorrow(today),
            QuickFilter::Next7 => self.go_next7(today),
        }
    }

    /// Reducer over every user action.
    pub fn apply(self, action: Action, today: CalendarDate) -> Result<Self> {
        let next = match action {
            Action::SelectDate(date) => self.select_date(date),
            Action::SelectDay(day) => self.select_day(day)?,
            Action::NavigateMonth(direction) => self.navigate_month(direction),
            Action::SetRange(range) => self.set_range(range),
            Action::JumpTo(date) => self.jump_to(date),
            Action::Quick(filter) => self.apply_quick_filter(filter, today),
        };
        Ok(next)
    }

    /// True when `date` falls in the visible month.
    pub fn is_visible(&self, date: CalendarDate) -> bool {
        date.year() == self.visible_year && date.month() == self.visible_month
    }

    pub fn visible_days(&self) -> Result<u32> {
        days_in_month(self.visible_year, self.visible_month)
    }
}

/// Named shortcuts that move the selection relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum QuickFilter {
    #[strum(serialize = "today", to_string = "today")]
    Today,
    #[strum(serialize = "tomorrow", to_string = "tomorrow")]
    Tomorrow,
    #[strum(serialize = "next7", to_string = "next7")]
    Next7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectDate(CalendarDate),
    SelectDay(u32),
    NavigateMonth(MonthDirection),
    SetRange(RangeDays),
    JumpTo(CalendarDate),
    Quick(QuickFilter),
}
