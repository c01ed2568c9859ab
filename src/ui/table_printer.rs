use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";

/// One titled table: headers, already formatted rows and what to print when
/// there are no rows.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    pub title: String,
    pub headers: &'a [&'a str],
    pub rows: Vec<Vec<String>>,
    pub empty_message: String,
    pub min_width: usize,
}

impl<'a> Table<'a> {
    pub fn new(
        title: impl Into<String>,
        headers: &'a [&'a str],
        empty_message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
            empty_message: empty_message.into(),
            min_width: 0,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy that indents every line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            left_pad: pad,
            ..self.clone()
        }
    }

    pub fn print(&self, table: &Table<'_>) {
        let _ = self.render(table, &mut io::stdout());
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table<'_>, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths(table.headers, &table.rows);
        let width = self.width_of(table, &widths);

        self.write_banner(out, &table.title, width)?;
        if table.rows.is_empty() {
            self.write_line(out, &table.empty_message)?;
            return self.write_rule(out, width);
        }

        self.write_line(out, &self.join_cells(table.headers, &widths))?;
        self.write_rule(out, width)?;
        for row in &table.rows {
            self.write_line(out, &self.join_cells(row, &widths))?;
        }
        self.write_rule(out, width)
    }

    /// Total width `table` would be printed at.
    pub fn table_width(&self, table: &Table<'_>) -> usize {
        let widths = self.column_widths(table.headers, &table.rows);
        self.width_of(table, &widths)
    }

    fn width_of(&self, table: &Table<'_>, widths: &[usize]) -> usize {
        let natural = if widths.is_empty() {
            0
        } else {
            widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_SEPARATOR.len()
        };
        let mut width = natural
            .max(table.min_width)
            .max(self.util.visible_width(&table.title));
        if table.rows.is_empty() {
            width = width.max(self.util.visible_width(&table.empty_message));
        }
        width
    }

    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(self.util.visible_width(cell));
            }
        }
        widths
    }

    fn join_cells<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, &w)| self.util.pad_visible(cell.as_ref(), w))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        line.trim_end().to_string()
    }

    fn write_banner<W: Write + ?Sized>(&self, out: &mut W, title: &str, width: usize) -> io::Result<()> {
        self.write_rule(out, width)?;
        self.write_line(out, &title.to_uppercase())?;
        self.write_rule(out, width)
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        self.write_line(out, &"-".repeat(width.max(1)))
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }
}
