use serde::Serialize;

use crate::aggregate::{AggregateSeries, Scope};

/// Number of tick intervals between the axis bounds.
const AXIS_STEPS: f64 = 5.0;

/// Y-axis range with one unit of headroom on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub step_size: f64,
}

impl AxisBounds {
    /// Bounds covering `values`: `floor(min) - 1` to `ceil(max) + 1`, in five steps.
    ///
    /// `values` must be non-empty; an empty slice yields infinite bounds.
    pub fn of(values: &[f64]) -> Self {
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = lo.floor() - 1.0;
        let max = hi.ceil() + 1.0;
        Self { min, max, step_size: (max - min) / AXIS_STEPS }
    }
}

/// One line of the chart with its fixed styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
    pub tension: f64,
}

impl ChartDataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: "#36A2EB",
            background_color: "rgba(54, 162, 235, 0.2)",
            fill: true,
            tension: 0.4,
        }
    }
}

/// Line-chart input: year labels, one dataset, axis bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub dataset: ChartDataset,
    pub axis_bounds: AxisBounds,
}

/// Turn an aggregate into a chart series.
pub fn to_series(aggregate: &AggregateSeries) -> ChartSeries {
    let label = match &aggregate.scope {
        Scope::World => "World average".to_string(),
        Scope::Country(code) => format!("{code} value"),
    };

    ChartSeries {
        labels: aggregate.years.iter().map(i32::to_string).collect(),
        dataset: ChartDataset::new(label, aggregate.values.clone()),
        axis_bounds: AxisBounds::of(&aggregate.values),
    }
}
