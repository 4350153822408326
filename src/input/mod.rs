//! Input readers for the command line: CSV and JSON documents loaded into a
//! [`Table`].

use crate::errors::{AppError, AppResult};
use crate::record::json;
use crate::table::Table;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

/// Records read from an input document, not yet added to a table.
pub enum Records {
    /// CSV: cells are kept as strings.
    Text {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// JSON: an array of objects, cells keep their JSON type.
    Json {
        headers: Vec<String>,
        list: serde_json::Value,
    },
}

impl Records {
    pub fn headers(&self) -> &[String] {
        match self {
            Records::Text { headers, .. } | Records::Json { headers, .. } => headers,
        }
    }

    /// Add every record to `table`, in document order.
    pub fn fill(&self, table: &mut Table) -> AppResult<()> {
        match self {
            Records::Text { rows, .. } => table.add_row_list(rows),
            Records::Json { list, .. } => table.add_json_list(list),
        }
    }
}

pub fn read<R: Read>(format: InputFormat, reader: R, columns: Option<&[String]>) -> AppResult<Records> {
    match format {
        InputFormat::Csv => read_csv(reader, columns),
        InputFormat::Json => read_json(reader, columns),
    }
}

/// The first CSV record is the header; `columns` replaces it when given.
pub fn read_csv<R: Read>(reader: R, columns: Option<&[String]>) -> AppResult<Records> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = match columns {
        Some(c) => c.to_vec(),
        None => rdr.headers()?.iter().map(String::from).collect(),
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }
    log::debug!("csv input: {} columns, {} rows", headers.len(), rows.len());

    Ok(Records::Text { headers, rows })
}

/// A JSON array of objects. Headers are `columns`, or the keys of the first
/// object.
pub fn read_json<R: Read>(reader: R, columns: Option<&[String]>) -> AppResult<Records> {
    let list: serde_json::Value = serde_json::from_reader(reader)?;
    let elements = json::elements_of(&list)?;

    let headers = match (columns, elements.first()) {
        (Some(c), _) => c.to_vec(),
        (None, Some(first)) => json::headers_of(first)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "cannot derive headers from an empty list; use --columns".into(),
            ));
        }
    };
    log::debug!("json input: {} columns, {} records", headers.len(), elements.len());

    Ok(Records::Json { headers, list })
}
