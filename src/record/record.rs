use std::collections::BTreeSet;

use serde::Serialize;

use super::CountryCode;

/// Normalized per-country yearly series.
/// Invariant: `series` is sorted by ascending year with no repeated years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub code: CountryCode,
    pub name: String,
    pub indicator: Option<String>,
    pub series: Vec<(i32, f64)>,
}

impl Record {
    /// The most recent (year, value) point, if any.
    #[inline] pub fn latest(&self) -> Option<(i32, f64)> { self.series.last().copied() }

    /// The value reported for `year`, if any.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.series.binary_search_by_key(&year, |&(y, _)| y)
            .ok()
            .map(|i| self.series[i].1)
    }

    /// Years covered by the series, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ { self.series.iter().map(|&(y, _)| y) }
}

/// One normalized snapshot of a fetched dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    /// Country records, in first-seen row order, unique by code.
    pub records: Vec<Record>,
    /// The precomputed `WORLD` row, kept apart from per-country computation.
    pub world: Option<Record>,
}

impl Dataset {
    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Look up a country record by (normalized) code.
    pub fn get(&self, code: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.code.as_str() == code)
    }

    /// Ascending union of all years present across country records.
    pub fn years(&self) -> Vec<i32> {
        self.records.iter()
            .flat_map(Record::years)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
