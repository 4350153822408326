//! Rendering: one shared layout for the header and every row.

use super::Table;
use crate::errors::AppResult;
use crate::utils::formatting::{cell_width, pad_right, split_line};
use std::fmt;
use std::io::{self, Write};

/// Final column widths plus margin, shared by every emitted line.
struct Layout {
    widths: Vec<usize>,
    margin: usize,
}

impl Layout {
    fn margin_after(&self, column: usize) -> usize {
        // no margin after the last column
        if column + 1 == self.widths.len() {
            0
        } else {
            self.margin
        }
    }

    fn total_width(&self) -> usize {
        (0..self.widths.len())
            .map(|i| self.widths[i] + self.margin_after(i))
            .sum()
    }

    fn line(&self, cells: &[String]) -> String {
        let mut out = String::with_capacity(self.total_width() + 1);
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&pad_right(cell, self.widths[i]));
            out.push_str(&" ".repeat(self.margin_after(i)));
        }
        out.push('\n');
        out
    }
}

impl Table {
    /// Final width of each column: the widest of header, minimum width and
    /// every cell added so far.
    pub fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cell_width(header)
                    .max(self.minwidths[i])
                    .max(self.cell_widths[i])
            })
            .collect()
    }

    fn layout(&self) -> Layout {
        Layout {
            widths: self.widths(),
            margin: self.margin,
        }
    }

    /// The rendered table as a string.
    pub fn render(&self) -> String {
        let layout = self.layout();
        let mut out = layout.line(&self.headers);

        if self.split_line {
            out.push_str(&split_line(layout.total_width()));
            out.push('\n');
        }

        for row in &self.rows {
            out.push_str(&layout.line(row));
        }

        if self.rows.is_empty() && !self.empty_text.is_empty() {
            out.push_str(&self.empty_text);
            out.push('\n');
        }
        out
    }

    /// Write the rendered table to `out`. Write failures are returned as-is.
    pub fn write_to<W: Write>(&self, out: &mut W) -> AppResult<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Print the table to standard output.
    pub fn print(&self) -> AppResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
