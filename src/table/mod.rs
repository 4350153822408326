//! Aligned, fixed-width tables for terminal output.
//!
//! A [`Table`] is configured (headers, minimum widths, column formats),
//! populated (each row is formatted on insertion and the running column
//! widths are updated), then rendered. Rendering never mutates the table, so
//! it can be repeated and interleaved with further insertions.
//!
//! ```
//! use tableify::{row, Table};
//!
//! let mut table = Table::new();
//! table.set_headers(["Name", "Age"]);
//! table.add_row(row!["Bob", 30]).unwrap();
//!
//! assert_eq!(table.render(), "Name   Age\n----------\nBob    30 \n");
//! ```

mod render;

use crate::errors::{AppError, AppResult};
use crate::format::{FormatFn, default_formatter, format_cell};
use crate::record::{ColumnSpec, Tableify, json};
use crate::utils::cell_width;
use crate::value::Value;

pub const DEFAULT_MARGIN: usize = 3;

pub struct Table {
    headers: Vec<String>,
    minwidths: Vec<usize>,
    formats: Vec<String>,
    /// Running maximum of formatted cell widths, per column.
    cell_widths: Vec<usize>,
    rows: Vec<Vec<String>>,

    /// Spaces after every column except the last.
    pub margin: usize,
    /// Dash separator between header and rows.
    pub split_line: bool,
    /// Printed instead of rows when the table is empty (if non-empty).
    pub empty_text: String,

    format_fn: FormatFn,
}

impl Default for Table {
    fn default() -> Self {
        Self::with_formatter(default_formatter())
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table using `format_fn` for cells without an explicit column format.
    pub fn with_formatter(format_fn: FormatFn) -> Self {
        Self {
            headers: Vec::new(),
            minwidths: Vec::new(),
            formats: Vec::new(),
            cell_widths: Vec::new(),
            rows: Vec::new(),
            margin: DEFAULT_MARGIN,
            split_line: true,
            empty_text: String::new(),
            format_fn,
        }
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_split_line(mut self, split_line: bool) -> Self {
        self.split_line = split_line;
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Replace the formatter. Rows already added keep their formatted text.
    pub fn set_format_fn(&mut self, format_fn: FormatFn) {
        self.format_fn = format_fn;
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn minwidths(&self) -> &[usize] {
        &self.minwidths
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ---------------------------
    // Configuration
    // ---------------------------

    /// Establish the column set. Minimum widths, formats, computed widths and
    /// any rows are reset for the new column count.
    pub fn set_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .map(|h| ColumnSpec {
                header: h.into(),
                width: 0,
                format: String::new(),
            })
            .collect();
        self.establish(columns);
    }

    /// Headers, minimum widths and formats from a record type's annotations.
    pub fn set_headers_from_struct<T: Tableify>(&mut self) -> AppResult<()> {
        let columns = T::columns()?;
        self.establish(columns);
        Ok(())
    }

    /// Same as [`Table::set_headers_from_struct`], inferring the type from a sample.
    pub fn set_headers_from_record<T: Tableify>(&mut self, _sample: &T) -> AppResult<()> {
        self.set_headers_from_struct::<T>()
    }

    /// Headers from the keys of a JSON object.
    pub fn set_headers_from_json(&mut self, sample: &serde_json::Value) -> AppResult<()> {
        let headers = json::headers_of(sample)?;
        self.set_headers(headers);
        Ok(())
    }

    pub fn set_widths(&mut self, widths: &[usize]) -> AppResult<()> {
        if widths.len() != self.headers.len() {
            log::warn!(
                "rejected {} widths for {} columns",
                widths.len(),
                self.headers.len()
            );
            return Err(AppError::InvalidConfiguration(format!(
                "widths count ({}) does not match headers count ({})",
                widths.len(),
                self.headers.len()
            )));
        }
        self.minwidths = widths.to_vec();
        Ok(())
    }

    /// Per-column printf-style formats; an empty string keeps the formatter.
    /// Only rows added afterwards are affected.
    pub fn set_formats<I, S>(&mut self, formats: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let formats: Vec<String> = formats.into_iter().map(Into::into).collect();
        if formats.len() != self.headers.len() {
            log::warn!(
                "rejected {} formats for {} columns",
                formats.len(),
                self.headers.len()
            );
            return Err(AppError::InvalidConfiguration(format!(
                "formats count ({}) does not match headers count ({})",
                formats.len(),
                self.headers.len()
            )));
        }
        self.formats = formats;
        Ok(())
    }

    fn establish(&mut self, columns: Vec<ColumnSpec>) {
        let n = columns.len();
        self.headers = Vec::with_capacity(n);
        self.minwidths = Vec::with_capacity(n);
        self.formats = Vec::with_capacity(n);
        for column in columns {
            self.headers.push(column.header);
            self.minwidths.push(column.width);
            self.formats.push(column.format);
        }
        self.cell_widths = vec![0; n];
        self.rows.clear();
        log::debug!("table headers set: {:?}", self.headers);
    }

    // ---------------------------
    // Rows
    // ---------------------------

    fn check_arity(&self, len: usize) -> AppResult<()> {
        if self.headers.is_empty() {
            log::warn!("rejected row: headers are not set");
            return Err(AppError::InvalidInput(
                "headers must be set before adding rows".into(),
            ));
        }
        if len != self.headers.len() {
            log::warn!(
                "rejected row of {} values for {} columns",
                len,
                self.headers.len()
            );
            return Err(AppError::InvalidInput(format!(
                "columns count ({}) does not match headers count ({})",
                len,
                self.headers.len()
            )));
        }
        Ok(())
    }

    /// Format and append one row of values.
    pub fn add_row<I, V>(&mut self, values: I) -> AppResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.check_arity(values.len())?;
        self.push_row(&values);
        Ok(())
    }

    fn push_row(&mut self, values: &[Value]) {
        let row: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| format_cell(&self.format_fn, &self.formats[i], &self.headers[i], v))
            .collect();

        for (width, cell) in self.cell_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell_width(cell));
        }
        log::trace!("row {} added: {:?}", self.rows.len(), row);
        self.rows.push(row);
    }

    /// Append rows that are already strings. Every row is checked before any
    /// is added.
    pub fn add_row_list<I, R, S>(&mut self, rows: I) -> AppResult<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<Value>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|s| Value::Str(s.into())).collect())
            .collect();
        self.add_value_rows(rows)
    }

    /// Append the annotated fields of one record.
    pub fn add_row_object<T: Tableify>(&mut self, record: &T) -> AppResult<()> {
        self.add_row(record.values())
    }

    /// Append a sequence of records in order. Every record is checked before
    /// any is added.
    pub fn add_row_object_list<T: Tableify>(&mut self, records: &[T]) -> AppResult<()> {
        let rows = records.iter().map(|record| record.values()).collect();
        self.add_value_rows(rows)
    }

    /// Append one JSON object, taking cells by header name.
    pub fn add_json_object(&mut self, record: &serde_json::Value) -> AppResult<()> {
        let values = json::values_of(record, &self.headers)?;
        self.check_arity(values.len())?;
        self.push_row(&values);
        Ok(())
    }

    /// Append every object of a JSON array. Every element is checked before
    /// any is added.
    pub fn add_json_list(&mut self, records: &serde_json::Value) -> AppResult<()> {
        let rows = json::elements_of(records)?
            .iter()
            .map(|record| json::values_of(record, &self.headers))
            .collect::<AppResult<Vec<_>>>()?;
        self.add_value_rows(rows)
    }

    fn add_value_rows(&mut self, rows: Vec<Vec<Value>>) -> AppResult<()> {
        for row in &rows {
            self.check_arity(row.len())?;
        }
        for row in &rows {
            self.push_row(row);
        }
        log::debug!("{} rows added, {} total", rows.len(), self.rows.len());
        Ok(())
    }
}
