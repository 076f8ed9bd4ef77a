use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// A backend row as received: string keys with arbitrary JSON values.
pub type RawRow = Map<String, Value>;

static YEAR_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Year_(\d{4})$").expect("year-key pattern is a valid regex")
});

const SCALAR_YEAR_KEYS: [&str; 2] = ["year", "Year"];
const SCALAR_VALUE_KEYS: [&str; 2] = ["value", "Value"];

/// Layout of a row's measurements, resolved once per row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowShape {
    /// One `Year_<YYYY>` field per calendar year.
    Wide(Vec<(i32, f64)>),
    /// A single current value with its year.
    Scalar { year: i32, value: f64 },
    /// No recognizable year information.
    Empty,
}

impl RowShape {
    /// Classify `row`. Two or more `Year_<YYYY>` keys make a wide row; exactly one is read
    /// as a scalar point, as is a legacy `year`/`value` pair.
    pub(crate) fn of(row: &RawRow) -> Self {
        let mut year_fields = row.iter()
            .filter_map(|(key, value)| year_of_key(key).map(|year| (key.as_str(), year, value)))
            .collect::<Vec<_>>();

        match year_fields.len() {
            0 => Self::scalar_fields(row),
            1 => {
                let (_, year, value) = year_fields[0];
                Self::Scalar { year, value: coerce_value(value) }
            }
            _ => {
                year_fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
                Self::Wide(year_fields.into_iter().map(|(_, year, value)| (year, coerce_value(value))).collect())
            }
        }
    }

    fn scalar_fields(row: &RawRow) -> Self {
        let year = scalar_year(row);
        let value = SCALAR_VALUE_KEYS.iter().find_map(|key| row.get(*key));
        match (year, value) {
            (Some(year), Some(value)) => Self::Scalar { year, value: coerce_value(value) },
            _ => Self::Empty,
        }
    }

    /// Flatten into an ascending (year, value) series, applying `min_wide_year` to wide rows only.
    pub(crate) fn into_series(self, min_wide_year: i32) -> Vec<(i32, f64)> {
        match self {
            Self::Wide(points) => points.into_iter().filter(|&(year, _)| year >= min_wide_year).collect(),
            Self::Scalar { year, value } => vec![(year, value)],
            Self::Empty => Vec::new(),
        }
    }
}

/// The `year`/`Year` field of a scalar-layout row.
pub(crate) fn scalar_year(row: &RawRow) -> Option<i32> {
    SCALAR_YEAR_KEYS.iter().find_map(|key| row.get(*key)).and_then(coerce_year)
}

/// The year encoded in a `Year_<YYYY>` key.
pub(crate) fn year_of_key(key: &str) -> Option<i32> {
    YEAR_KEY.captures(key)?.get(1)?.as_str().parse().ok()
}

/// Numeric coercion: numbers as-is, numeric strings parsed, anything else (or non-finite) is 0.
pub(crate) fn coerce_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// A finite integral value within `i32` range, e.g. `2019.0`.
fn whole_year(value: f64) -> Option<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i32)
}

fn coerce_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_f64().and_then(whole_year),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole_year),
        _ => None,
    }
}
