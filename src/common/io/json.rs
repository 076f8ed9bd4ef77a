use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::record::RawRow;

/// Parse a JSON array of row objects. Non-object elements are skipped.
pub fn read_rows_from_str(json: &str) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_str(json)
        .context("[io::json] Failed to parse rows JSON")?;

    let Value::Array(items) = value else {
        bail!("[io::json] Expected a JSON array of row objects");
    };

    let total = items.len();
    let rows = items.into_iter()
        .filter_map(|item| match item {
            Value::Object(row) => Some(row),
            _ => None,
        })
        .collect::<Vec<_>>();

    if rows.len() < total {
        debug!(skipped = total - rows.len(), "skipped non-object rows");
    }
    Ok(rows)
}

/// Read a JSON array of row objects from `path`.
pub fn read_rows_from_file(path: &Path) -> Result<Vec<RawRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::json] Failed to read rows file: {}", path.display()))?;
    read_rows_from_str(&text)
        .with_context(|| format!("[io::json] Invalid rows file: {}", path.display()))
}

/// Serialize `value` as pretty JSON and write it atomically to `path`.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T, force: bool) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)
        .context("[io::json] Failed to serialize JSON")?;
    crate::common::write_file_atomic(path, &bytes, force)
}
