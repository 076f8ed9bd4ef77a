use geodash::{
    DashboardState, GeoFeatureStore, LegendColor, Scope, compute_series, export_csv, export_file_name, normalize,
    read_rows_from_str, render, to_series,
};
use pretty_assertions::assert_eq;

const FEATURES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"ISO_A3": "KEN", "ADMIN": "Kenya"},
         "geometry": {"type": "Polygon", "coordinates": [[[34, -4], [41, -4], [41, 5], [34, 5], [34, -4]]]}},
        {"type": "Feature", "properties": {"ISO_A3": "RWA", "ADMIN": "Rwanda"},
         "geometry": {"type": "Polygon", "coordinates": [[[29, -2.8], [30.9, -2.8], [30.9, -1], [29, -1], [29, -2.8]]]}},
        {"type": "Feature", "properties": {"ISO_A3": "ETH", "ADMIN": "Ethiopia"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[33, 3.4], [48, 3.4], [48, 15], [33, 15], [33, 3.4]]]]}}
    ]
}"#;

const ROWS: &str = r#"[
    {"Country_Name": "Kenya", "Country_Code": "ken", "Year_1960": 99, "Year_2019": 10, "Year_2020": 45.5},
    {"Country_Name": "Rwanda", "Country_Code": "RWA", "Year_2019": 30, "Year_2020": 0},
    {"Country_Name": "World", "Country_Code": "WORLD", "Year_2019": 1000, "Year_2020": 1000},
    {"Country_Name": "Footnote", "Year_2019": 5}
]"#;

#[test]
fn rows_to_map_and_chart() {
    let store = GeoFeatureStore::from_geojson_bytes(FEATURES.as_bytes()).unwrap();
    let rows = read_rows_from_str(ROWS).unwrap();
    let dataset = normalize(&rows);

    assert_eq!(dataset.len(), 2);
    assert!(dataset.world.is_some());
    assert_eq!(dataset.years(), vec![2019, 2020]);

    let layer = render(store.features(), &dataset.records);
    assert_eq!(layer.matched_count(), 2);
    assert_eq!(layer.get("KEN").unwrap().style.fill_color, LegendColor::DarkRed);
    assert_eq!(layer.get("RWA").unwrap().style.fill_color, LegendColor::LightGreen);
    assert_eq!(layer.get("ETH").unwrap().style.fill_opacity, 0.0);

    let world = compute_series(&dataset.records, &dataset.years(), &Scope::World);
    assert_eq!(world.values, vec![20.0, 45.5]);

    let chart = to_series(&world);
    assert_eq!(chart.labels, vec!["2019", "2020"]);
    assert_eq!((chart.axis_bounds.min, chart.axis_bounds.max), (19.0, 47.0));

    let missing = compute_series(&dataset.records, &dataset.years(), &Scope::parse("XYZ").unwrap());
    assert_eq!(missing.values, vec![0.0, 0.0]);
}

#[test]
fn session_view_and_export() {
    let store = GeoFeatureStore::from_geojson_bytes(FEATURES.as_bytes()).unwrap();
    let mut state = DashboardState::default();

    let stale = state.begin_fetch();
    let current = state.begin_fetch();
    assert!(state.complete_fetch(current, read_rows_from_str(ROWS).unwrap()));
    assert!(!state.complete_fetch(stale, Vec::new()));

    state.select(Scope::parse("KEN").unwrap());
    let view = state.view(&store).unwrap();
    assert_eq!(view.aggregate.values, vec![10.0, 45.5]);
    assert_eq!(view.layer.len(), 3);

    let geojson = view.layer.to_geojson();
    assert_eq!(geojson["features"][0]["properties"]["fillColor"], "#b22222");

    let svg = view.layer.to_svg_string().unwrap();
    assert!(svg.contains("<title>Country: Kenya\nYear: 2020\nValue: 45.50</title>"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(export_file_name("climate", &state.selection.to_string()));
    export_csv(state.rows(), &path, false).unwrap();
    assert!(path.ends_with("climate_data_KEN.csv"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, "Country_Name,Country_Code,Year_1960,Year_2019,Year_2020");
    assert_eq!(csv.lines().count(), 5);
}
