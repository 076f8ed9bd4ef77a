use ahash::AHashMap;
use tracing::debug;

use crate::{
    feature::GeoFeature,
    legend::{color_for, legend},
    record::Record,
};
use super::{FOUND_FILL_OPACITY, FeatureStyle, MapLayer, StyledFeature, Tooltip};

/// Join `features` to `records` by code and style each feature.
///
/// A matched feature is filled by the legend color of its latest value and carries a
/// tooltip; an unmatched feature gets zero fill opacity so only its outline shows.
/// Neither input is modified.
pub fn render<'a>(features: &'a [GeoFeature], records: &[Record]) -> MapLayer<'a> {
    let by_code: AHashMap<&str, &Record> = records.iter()
        .filter(|r| !r.code.is_world())
        .map(|r| (r.code.as_str(), r))
        .collect();

    let features = features.iter()
        .map(|feature| match by_code.get(&*feature.iso_code) {
            Some(record) => styled_match(feature, record),
            None => StyledFeature { feature, matched: false, style: FeatureStyle::no_data(), tooltip: None },
        })
        .collect::<Vec<_>>();

    let layer = MapLayer { features, legend: legend() };
    debug!(features = layer.len(), matched = layer.matched_count(), "rendered map layer");
    layer
}

fn styled_match<'a>(feature: &'a GeoFeature, record: &Record) -> StyledFeature<'a> {
    let latest = record.latest();
    let tooltip = latest.map(|(year, value)| Tooltip {
        country: feature.admin_name.to_string(),
        year,
        value,
    });

    StyledFeature {
        feature,
        matched: true,
        style: FeatureStyle::with_fill(color_for(latest.map(|(_, value)| value)), FOUND_FILL_OPACITY),
        tooltip,
    }
}
