use std::io::Write;

use anyhow::{Context, Result};
use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use serde_json::Value;

use crate::record::RawRow;

/// Column names across `rows`, in first-seen order.
pub(crate) fn row_columns(rows: &[RawRow]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) { columns.push(key.clone()) }
        }
    }
    columns
}

/// Render a JSON cell as CSV text; nulls become empty cells.
fn cell_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Build a string-typed DataFrame from heterogeneous rows.
pub(crate) fn rows_to_dataframe(rows: &[RawRow]) -> Result<DataFrame> {
    let columns = row_columns(rows).into_iter()
        .map(|name| {
            let cells = rows.iter()
                .map(|row| cell_text(row.get(&name)))
                .collect::<Vec<Option<String>>>();
            Column::from(Series::new(name.as_str().into(), cells))
        })
        .collect::<Vec<_>>();

    DataFrame::new(columns).context("[io::csv] Failed to assemble rows into a DataFrame")
}

/// Write heterogeneous rows as CSV (header row first).
pub fn write_rows_csv<W: Write>(rows: &[RawRow], writer: W) -> Result<()> {
    let mut df = rows_to_dataframe(rows)?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut df)
        .context("[io::csv] Failed to write CSV")
}
