use crate::calendar::dates::{CalendarDate, DateKey, days_in_month, first_weekday_from, to_key};
use crate::core::index::EventIndex;
use crate::core::types::WeekStart;
use crate::errors::Result;

pub const WEEK_WIDTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st of the month.
    Blank,
    Day {
        day: u32,
        key: DateKey,
        has_events: bool,
    },
}

impl GridCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn key(&self) -> Option<&DateKey> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { key, .. } => Some(key),
        }
    }
}

/// Cells for a zero-based month in a Sunday-first calendar.
pub fn build_month_grid(year: i32, month: u32, index: &EventIndex) -> Result<Vec<GridCell>> {
    build_month_grid_from(year, month, index, WeekStart::Sunday)
}

/// Leading blanks, then one cell per day. No trailing padding: the last row is
/// as short as the month leaves it.
pub fn build_month_grid_from(
    year: i32,
    month: u32,
    index: &EventIndex,
    week_start: WeekStart,
) -> Result<Vec<GridCell>> {
    let blanks = first_weekday_from(year, month, week_start)? as usize;
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(GridCell::Blank, blanks));
    for day in 1..=days {
        let key = to_key(CalendarDate::new(year, month, day)?);
        let has_events = index.has_events(&key);
        cells.push(GridCell::Day {
            day,
            key,
            has_events,
        });
    }
    Ok(cells)
}

/// Row-wrap a grid at week width for rendering.
pub fn grid_rows(cells: &[GridCell]) -> Vec<&[GridCell]> {
    cells.chunks(WEEK_WIDTH).collect()
}
