use serde::Serialize;
use tracing::warn;

use crate::record::{CountryCode, Record};
use super::Scope;

/// Yearly values for one scope, aligned index-by-index with `years`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
    #[serde(rename = "sourceScope")]
    pub scope: Scope,
}

/// Compute the series for `scope` over exactly the given `years`.
///
/// A country scope reads the matching record, with 0 for missing years; an unknown
/// country yields an all-zero series. The world scope averages, per year, only the
/// countries reporting a value strictly greater than zero (0 when none do), so a
/// genuine zero measurement is treated like missing data.
pub fn compute_series(records: &[Record], years: &[i32], scope: &Scope) -> AggregateSeries {
    let values = match scope {
        Scope::Country(code) => country_values(records, years, code),
        Scope::World => world_values(records, years),
    };

    AggregateSeries { years: years.to_vec(), values, scope: scope.clone() }
}

fn country_values(records: &[Record], years: &[i32], code: &CountryCode) -> Vec<f64> {
    let Some(record) = records.iter().find(|r| &r.code == code) else {
        warn!(%code, "no record for selected country, using a zero series");
        return vec![0.0; years.len()];
    };

    years.iter()
        .map(|&year| record.value_at(year).unwrap_or(0.0))
        .collect()
}

fn world_values(records: &[Record], years: &[i32]) -> Vec<f64> {
    years.iter()
        .map(|&year| {
            let (sum, count) = records.iter()
                .filter(|r| !r.code.is_world())
                .filter_map(|r| r.value_at(year))
                .filter(|&v| v > 0.0)
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

            if count == 0 { 0.0 } else { sum / count as f64 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, series: &[(i32, f64)]) -> Record {
        Record {
            code: CountryCode::parse(code).unwrap(),
            name: code.to_string(),
            indicator: None,
            series: series.to_vec(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("AAA", &[(2000, 10.0), (2001, 0.0)]),
            record("BBB", &[(2000, 20.0), (2001, -5.0)]),
            record("CCC", &[(2000, 0.0)]),
            record("DDD", &[(2000, 30.0)]),
        ]
    }

    #[test]
    fn world_average_excludes_non_positive_values() {
        let series = compute_series(&sample(), &[2000], &Scope::World);
        assert_eq!(series.values, vec![20.0]);
    }

    #[test]
    fn world_average_is_zero_without_qualifying_values() {
        let series = compute_series(&sample(), &[2001, 2002], &Scope::World);
        assert_eq!(series.values, vec![0.0, 0.0]);
    }

    #[test]
    fn world_rows_never_participate() {
        let mut records = sample();
        records.push(record("WORLD", &[(2000, 1000.0)]));
        assert_eq!(compute_series(&records, &[2000], &Scope::World).values, vec![20.0]);
    }

    #[test]
    fn country_series_fills_missing_years_with_zero() {
        let scope = Scope::parse("aaa").unwrap();
        let series = compute_series(&sample(), &[1999, 2000, 2001], &scope);
        assert_eq!(series.years, vec![1999, 2000, 2001]);
        assert_eq!(series.values, vec![0.0, 10.0, 0.0]);
        assert_eq!(series.scope, scope);
    }

    #[test]
    fn unknown_country_yields_zero_series() {
        let series = compute_series(&sample(), &[2000, 2001], &Scope::parse("ZZZ").unwrap());
        assert_eq!(series.values, vec![0.0, 0.0]);
    }

    #[test]
    fn output_follows_input_year_order() {
        let series = compute_series(&sample(), &[2001, 2000], &Scope::parse("BBB").unwrap());
        assert_eq!(series.years, vec![2001, 2000]);
        assert_eq!(series.values, vec![-5.0, 20.0]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let records = sample();
        let first = compute_series(&records, &[2000, 2001], &Scope::World);
        let second = compute_series(&records, &[2000, 2001], &Scope::World);
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_scope_as_source_scope() {
        let series = compute_series(&sample(), &[2000], &Scope::World);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["sourceScope"], "world");
        assert_eq!(json["years"][0], 2000);
    }
}
