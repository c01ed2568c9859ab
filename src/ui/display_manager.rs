use crate::calendar::CalendarView;
use crate::config::Config;
use crate::ui::ansi::{STYLE_BOLD, STYLE_RESET};
use crate::ui::display_data::{DisplayDataBuilder, GRID_WIDTH, LEGEND};
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const SELECTED_HEADERS: [&str; 4] = ["NO.", "TITLE", "TIME", "LOCATION"];
const NEARBY_HEADERS: [&str; 6] = ["NO.", "DATE", "WHEN", "TITLE", "TIME", "LOCATION"];
const CONFIG_HEADERS: [&str; 4] = ["ID", "KEY", "DESCRIPTION", "VALUE"];
const HELP_HEADERS: [&str; 2] = ["COMMAND", "DESCRIPTION"];

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected_table(&self, view: &CalendarView<'_>) -> Table<'static> {
        Table::new(
            format!("Events on {}", view.state.selected_date),
            &SELECTED_HEADERS,
            "No events on this day.",
        )
        .with_rows(self.data.selected_rows(view))
    }

    fn nearby_table(&self, view: &CalendarView<'_>) -> Table<'static> {
        let radius = view.state.range_days.days();
        Table::new(
            format!("Nearby (±{radius} days)"),
            &NEARBY_HEADERS,
            format!("No other events within ±{radius} days."),
        )
        .with_rows(self.data.nearby_rows(view))
    }

    /// Width shared by the grid block and both tables.
    pub fn frame_width(&self, view: &CalendarView<'_>) -> usize {
        GRID_WIDTH
            .max(self.util.visible_width(LEGEND))
            .max(self.util.visible_width(&self.data.status_line(view)))
            .max(self.printer.table_width(&self.selected_table(view)))
            .max(self.printer.table_width(&self.nearby_table(view)))
    }

    /// Month grid, legend, status line, then the selected-day and nearby
    /// tables, each line indented by `left_pad`.
    pub fn render_calendar<W: Write + ?Sized>(
        &self,
        view: &CalendarView<'_>,
        left_pad: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let frame = self.frame_width(view);
        let pad = " ".repeat(left_pad);
        // grid block sits centered inside the frame
        let grid_pad = " ".repeat(left_pad + frame.saturating_sub(GRID_WIDTH) / 2);

        let title = self
            .util
            .center_visible(&self.data.month_title(view), GRID_WIDTH);
        writeln!(out, "{grid_pad}{STYLE_BOLD}{}{STYLE_RESET}", title.trim_end())?;
        writeln!(out, "{grid_pad}{}", self.data.weekday_header(view.week_start))?;
        for line in self.data.grid_lines(view) {
            writeln!(out, "{grid_pad}{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "{pad}{LEGEND}")?;
        writeln!(out, "{pad}{}", self.data.status_line(view))?;
        writeln!(out)?;

        let printer = self.printer.with_left_pad(left_pad);
        printer.render(&self.selected_table(view).with_min_width(frame), out)?;
        writeln!(out)?;
        printer.render(&self.nearby_table(view).with_min_width(frame), out)
    }

    pub fn display_calendar(&self, view: &CalendarView<'_>) {
        let pad = self.util.center_pad(self.frame_width(view));
        let _ = self.render_calendar(view, pad, &mut io::stdout());
    }

    fn config_table(&self, config: &Config) -> Table<'static> {
        Table::new("Config", &CONFIG_HEADERS, "No config items found.")
            .with_rows(self.data.config_rows(config))
    }

    /// Print the config table centered; returns its width for the prompts
    /// that follow it.
    pub fn display_config_centered(&self, config: &Config) -> usize {
        let table = self.config_table(config);
        let width = self.printer.table_width(&table);
        self.printer
            .with_left_pad(self.util.center_pad(width))
            .print(&table);
        width
    }

    pub fn render_help<W: Write + ?Sized>(
        &self,
        rows: Vec<Vec<String>>,
        out: &mut W,
    ) -> io::Result<()> {
        let table = Table::new("Commands", &HELP_HEADERS, "No commands available.").with_rows(rows);
        self.printer.render(&table, out)
    }

    pub fn display_help(&self, rows: Vec<Vec<String>>) {
        let _ = self.render_help(rows, &mut io::stdout());
    }
}
