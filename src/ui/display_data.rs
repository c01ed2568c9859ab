use crate::calendar::grid::{GridCell, WEEK_WIDTH, grid_rows};
use crate::calendar::CalendarView;
use crate::config::Config;
use crate::core::types::WeekStart;
use crate::ui::ansi::{FG_CYAN, FG_YELLOW, STYLE_RESET, STYLE_REVERSE};
use chrono::Month;

/// Visible columns taken by one day cell: brackets, two digits, marker.
pub const CELL_WIDTH: usize = 5;
pub const GRID_WIDTH: usize = CELL_WIDTH * WEEK_WIDTH;
pub const EVENT_MARKER: char = '•';
pub const LEGEND: &str = "[n] selected  <n> today  • has events";

/// Turns a computed `CalendarView` into printable lines and table rows.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    /// "October 2023".
    pub fn month_title(&self, view: &CalendarView<'_>) -> String {
        let name = u8::try_from(view.state.visible_month + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("?");
        format!("{name} {}", view.state.visible_year)
    }

    pub fn weekday_header(&self, week_start: WeekStart) -> String {
        week_start
            .day_names()
            .iter()
            .map(|name| format!(" {name:<width$}", width = CELL_WIDTH - 1))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// One line per week, leading blanks included.
    pub fn grid_lines(&self, view: &CalendarView<'_>) -> Vec<String> {
        grid_rows(&view.cells)
            .into_iter()
            .map(|week| {
                week.iter()
                    .map(|cell| self.cell_text(view, cell))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn cell_text(&self, view: &CalendarView<'_>, cell: &GridCell) -> String {
        let GridCell::Day {
            day, has_events, ..
        } = cell
        else {
            return " ".repeat(CELL_WIDTH);
        };

        let selected = view.is_selected(cell);
        let today = view.is_today(cell);
        let (open, close, style) = match (selected, today) {
            (true, _) => ('[', ']', STYLE_REVERSE),
            (false, true) => ('<', '>', FG_CYAN),
            (false, false) => (' ', ' ', ""),
        };
        let label = if style.is_empty() {
            format!("{open}{day:>2}{close}")
        } else {
            format!("{style}{open}{day:>2}{close}{STYLE_RESET}")
        };
        let marker = if *has_events {
            format!("{FG_YELLOW}{EVENT_MARKER}{STYLE_RESET}")
        } else {
            " ".to_string()
        };
        format!("{label}{marker}")
    }

    pub fn status_line(&self, view: &CalendarView<'_>) -> String {
        let selected = view.state.selected_date;
        format!(
            "Selected: {} ({}) | Today: {} | Range: ±{} day(s)",
            selected,
            selected.naive().format("%A"),
            view.today,
            view.state.range_days.days()
        )
    }

    /// NO. | TITLE | TIME | LOCATION
    pub fn selected_rows(&self, view: &CalendarView<'_>) -> Vec<Vec<String>> {
        view.selected_events
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    (i + 1).to_string(),
                    e.title.clone(),
                    e.time.clone(),
                    e.location.clone(),
                ]
            })
            .collect()
    }

    /// NO. | DATE | WHEN | TITLE | TIME | LOCATION; NO. is what `jump` takes.
    pub fn nearby_rows(&self, view: &CalendarView<'_>) -> Vec<Vec<String>> {
        view.nearby
            .iter()
            .enumerate()
            .map(|(i, n)| {
                vec![
                    (i + 1).to_string(),
                    n.key.to_string(),
                    n.relative_label(),
                    n.event.title.clone(),
                    n.event.time.clone(),
                    n.event.location.clone(),
                ]
            })
            .collect()
    }

    /// ID | KEY | DESCRIPTION | VALUE
    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }
}
