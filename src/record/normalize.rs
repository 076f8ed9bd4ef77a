use ahash::AHashMap;
use serde_json::Value;
use tracing::debug;

use super::{CountryCode, Dataset, RawRow, Record, raw::RowShape};

/// Wide-layout years before this are dropped.
pub const MIN_WIDE_YEAR: i32 = 1961;

pub const CODE_KEY: &str = "Country_Code";
pub const NAME_KEY: &str = "Country_Name";
pub const INDICATOR_KEY: &str = "Indicator_Name";

/// Text of a string or numeric field; blank strings count as absent.
fn field_text(row: &RawRow, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert backend rows into one record per country code.
///
/// Rows without a usable country code are dropped silently: datasets routinely carry
/// footnote and aggregate rows. The `WORLD` row is set aside in [`Dataset::world`].
/// A repeated code replaces the earlier record in place.
pub fn normalize(rows: &[RawRow]) -> Dataset {
    normalize_with_min_year(rows, MIN_WIDE_YEAR)
}

/// As [`normalize`], with a custom cutoff for wide-layout years.
pub fn normalize_with_min_year(rows: &[RawRow], min_wide_year: i32) -> Dataset {
    let mut dataset = Dataset::default();
    let mut index: AHashMap<CountryCode, usize> = AHashMap::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let Some(code) = field_text(row, CODE_KEY).as_deref().and_then(CountryCode::parse) else {
            dropped += 1;
            continue;
        };

        let record = Record {
            name: field_text(row, NAME_KEY).unwrap_or_else(|| code.to_string()),
            indicator: field_text(row, INDICATOR_KEY),
            series: RowShape::of(row).into_series(min_wide_year),
            code,
        };

        if record.code.is_world() {
            dataset.world = Some(record);
        } else if let Some(&i) = index.get(&record.code) {
            debug!(code = %record.code, "duplicate country row replaces earlier one");
            dataset.records[i] = record;
        } else {
            index.insert(record.code.clone(), dataset.records.len());
            dataset.records.push(record);
        }
    }

    debug!(rows = rows.len(), records = dataset.records.len(), dropped, "normalized dataset");
    dataset
}
