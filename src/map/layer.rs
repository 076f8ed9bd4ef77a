use serde::Serialize;

use crate::{
    common::escape_xml,
    feature::GeoFeature,
    legend::{LegendColor, LegendEntry, NO_DATA_COLOR},
};

/// Fill opacity of a feature with a matching record.
pub const FOUND_FILL_OPACITY: f64 = 0.7;
/// Fill opacity of a feature without a record: drawn as an outline only.
pub const NO_DATA_FILL_OPACITY: f64 = 0.0;

/// Presentation attributes of one map feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill_color: LegendColor,
    pub fill_opacity: f64,
    pub weight: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub dash_array: &'static str,
}

impl FeatureStyle {
    /// Outline settings are shared by every feature; only the fill varies.
    pub const fn with_fill(fill_color: LegendColor, fill_opacity: f64) -> Self {
        Self { fill_color, fill_opacity, weight: 2.0, opacity: 1.0, color: "white", dash_array: "3" }
    }

    /// Style of a feature with no record.
    pub const fn no_data() -> Self { Self::with_fill(NO_DATA_COLOR, NO_DATA_FILL_OPACITY) }
}

/// Hover details for a feature with data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub country: String,
    pub year: i32,
    pub value: f64,
}

impl Tooltip {
    /// Value rendered with two decimals.
    pub fn value_label(&self) -> String { format!("{:.2}", self.value) }

    /// Plain-text form, one field per line.
    pub fn to_text(&self) -> String {
        format!("Country: {}\nYear: {}\nValue: {}", self.country, self.year, self.value_label())
    }

    /// HTML fragment for map tooltips.
    pub fn to_html(&self) -> String {
        format!(
            "<div><strong>Country:</strong> {}<br/><strong>Year:</strong> {}<br/><strong>Value:</strong> {}</div>",
            escape_xml(&self.country), self.year, self.value_label(),
        )
    }
}

/// A feature joined with its record (if any) and styled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledFeature<'a> {
    pub feature: &'a GeoFeature,
    /// Whether a record with the feature's code exists.
    pub matched: bool,
    pub style: FeatureStyle,
    pub tooltip: Option<Tooltip>,
}

/// A styled choropleth layer plus its legend. Borrows geometry from the feature store.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer<'a> {
    pub features: Vec<StyledFeature<'a>>,
    pub legend: Vec<LegendEntry>,
}

impl<'a> MapLayer<'a> {
    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Find a styled feature by ISO code.
    pub fn get(&self, iso_code: &str) -> Option<&StyledFeature<'a>> {
        self.features.iter().find(|f| &*f.feature.iso_code == iso_code)
    }

    /// Number of features joined to a record.
    pub fn matched_count(&self) -> usize { self.features.iter().filter(|f| f.matched).count() }
}
