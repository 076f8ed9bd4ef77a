use std::path::PathBuf;

use anyhow::Result;
use geodash::{GeoFeatureStore, normalize_with_min_year, read_rows_from_file, render, write_file_atomic};
use tracing::info;

use crate::cli::{Cli, MapFormat, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let default_name = match args.format {
        MapFormat::Svg => "./map.svg",
        MapFormat::Geojson => "./map.geojson",
    };
    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from(default_name));

    let store = GeoFeatureStore::from_geojson_file_with_keys(&args.features, &config.feature_keys)?;
    let rows = read_rows_from_file(&args.data)?;
    let dataset = normalize_with_min_year(&rows, config.min_wide_year);

    let layer = render(store.features(), &dataset.records);
    info!(features = layer.len(), matched = layer.matched_count(), "rendering map");

    let text = match args.format {
        MapFormat::Svg => layer.to_svg_string()?,
        MapFormat::Geojson => serde_json::to_string(&layer.to_geojson())?,
    };
    write_file_atomic(&out_path, text.as_bytes(), args.force)?;

    eprintln!("[render] wrote {}", out_path.display());
    Ok(())
}
