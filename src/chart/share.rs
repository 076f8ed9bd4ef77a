use serde::Serialize;
use serde_json::Value;

use crate::record::{RawRow, coerce_value};

/// Slice colors, cycled when there are more categories than colors.
pub const SHARE_PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#FF9F40", "#FFCD56",
    "#4BC0C0", "#9966FF", "#FF9999", "#C9CBCF", "#B9D1EA",
];

/// Pie-chart input: one slice per row, with each slice's share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    /// Percent of the total per slice; all zero when the total is zero.
    pub percentages: Vec<f64>,
    pub background_colors: Vec<&'static str>,
}

impl ShareSeries {
    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Hover text for slice `i`, e.g. `Forest: 120 ha (42.86%)`.
    pub fn tooltip(&self, i: usize, unit: &str) -> Option<String> {
        let label = self.labels.get(i)?;
        let value = self.data[i];
        let unit = if unit.is_empty() { String::new() } else { format!(" {unit}") };
        Some(format!("{label}: {value}{unit} ({:.2}%)", self.percentages[i]))
    }
}

/// Build a category share series from `rows`, labeling slices by `label_key` and
/// sizing them by `value_key` (non-numeric values count as 0).
pub fn share_series(rows: &[RawRow], label_key: &str, value_key: &str) -> ShareSeries {
    let labels = rows.iter()
        .map(|row| match row.get(label_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
        .collect::<Vec<_>>();
    let data = rows.iter()
        .map(|row| row.get(value_key).map_or(0.0, coerce_value))
        .collect::<Vec<_>>();

    let total: f64 = data.iter().sum();
    let percentages = if total == 0.0 || !total.is_finite() {
        vec![0.0; data.len()]
    } else {
        data.iter().map(|v| v / total * 100.0).collect()
    };

    ShareSeries {
        background_colors: (0..labels.len()).map(|i| SHARE_PALETTE[i % SHARE_PALETTE.len()]).collect(),
        labels,
        data,
        percentages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::read_rows_from_str;

    fn land_rows() -> Vec<RawRow> {
        read_rows_from_str(r#"[
            {"category_name": "Forest", "size_in_ha": 120, "parcel_count": "3"},
            {"category_name": "Cropland", "size_in_ha": 100.5, "parcel_count": 7},
            {"category_name": "Wetland", "size_in_ha": 59.5, "parcel_count": null}
        ]"#).unwrap()
    }

    #[test]
    fn slices_share_the_total() {
        let series = share_series(&land_rows(), "category_name", "size_in_ha");
        assert_eq!(series.labels, vec!["Forest", "Cropland", "Wetland"]);
        assert_eq!(series.data, vec![120.0, 100.5, 59.5]);
        assert!((series.percentages.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert_eq!(series.tooltip(0, "ha").as_deref(), Some("Forest: 120 ha (42.86%)"));
        assert_eq!(series.background_colors, vec!["#FF6384", "#36A2EB", "#FFCE56"]);
        assert!(series.tooltip(3, "ha").is_none());
    }

    #[test]
    fn counts_are_coerced() {
        let series = share_series(&land_rows(), "category_name", "parcel_count");
        assert_eq!(series.data, vec![3.0, 7.0, 0.0]);
        assert_eq!(series.tooltip(1, "parcels").as_deref(), Some("Cropland: 7 parcels (70.00%)"));
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let rows = read_rows_from_str(r#"[{"category_name": "A", "size_in_ha": 0}, {"size_in_ha": "x"}]"#).unwrap();
        let series = share_series(&rows, "category_name", "size_in_ha");
        assert_eq!(series.percentages, vec![0.0, 0.0]);
        assert_eq!(series.labels, vec!["A", ""]);
        assert!(share_series(&[], "category_name", "size_in_ha").is_empty());
    }

    #[test]
    fn palette_cycles() {
        let rows = (0..12)
            .map(|i| read_rows_from_str(&format!(r#"[{{"category_name": "c{i}", "size_in_ha": 1}}]"#)).unwrap().remove(0))
            .collect::<Vec<_>>();
        let series = share_series(&rows, "category_name", "size_in_ha");
        assert_eq!(series.background_colors[10], SHARE_PALETTE[0]);
        assert_eq!(series.len(), 12);
    }
}
