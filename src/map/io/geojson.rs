use serde_json::{Map, Value, json};

use crate::{common::multipolygon_to_geojson, map::{MapLayer, StyledFeature}};

impl MapLayer<'_> {
    /// Export the layer as a GeoJSON FeatureCollection.
    ///
    /// Each feature carries its code, name, style and tooltip as properties;
    /// the legend is attached as a foreign member of the collection.
    pub fn to_geojson(&self) -> Value {
        let features = self.features.iter()
            .map(feature_to_geojson)
            .collect::<Vec<_>>();

        json!({
            "type": "FeatureCollection",
            "features": features,
            "legend": self.legend,
        })
    }
}

fn feature_to_geojson(styled: &StyledFeature<'_>) -> Value {
    let style = &styled.style;

    let mut props = Map::new();
    props.insert("iso_code".into(), json!(&*styled.feature.iso_code));
    props.insert("name".into(), json!(&*styled.feature.admin_name));
    props.insert("matched".into(), json!(styled.matched));
    props.insert("fillColor".into(), json!(style.fill_color.hex()));
    props.insert("fillOpacity".into(), json!(style.fill_opacity));
    props.insert("weight".into(), json!(style.weight));
    props.insert("opacity".into(), json!(style.opacity));
    props.insert("color".into(), json!(style.color));
    props.insert("dashArray".into(), json!(style.dash_array));

    match &styled.tooltip {
        Some(tooltip) => {
            props.insert("year".into(), json!(tooltip.year));
            props.insert("value".into(), json!(tooltip.value));
            props.insert("tooltip".into(), json!(tooltip.to_html()));
        }
        None => { props.insert("tooltip".into(), Value::Null); }
    }

    json!({
        "type": "Feature",
        "id": &*styled.feature.iso_code,
        "properties": props,
        "geometry": multipolygon_to_geojson(&styled.feature.geometry),
    })
}

#[cfg(test)]
mod tests {
    use geo::{MultiPolygon, polygon};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{feature::GeoFeature, map::render, record::{CountryCode, Record}};

    #[test]
    fn geojson_carries_style_and_tooltip() {
        let features = vec![
            GeoFeature {
                iso_code: "KEN".into(),
                admin_name: "Kenya".into(),
                geometry: MultiPolygon(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]]),
            },
            GeoFeature {
                iso_code: "TZA".into(),
                admin_name: "Tanzania".into(),
                geometry: MultiPolygon(vec![polygon![(x: 0.0, y: -1.0), (x: 1.0, y: -1.0), (x: 1.0, y: 0.0)]]),
            },
        ];
        let records = vec![Record {
            code: CountryCode::parse("ken").unwrap(),
            name: "Kenya".into(),
            indicator: None,
            series: vec![(2020, 15.0)],
        }];

        let geojson = render(&features, &records).to_geojson();
        assert_eq!(geojson["type"], "FeatureCollection");
        assert_eq!(geojson["legend"].as_array().unwrap().len(), 12);

        let kenya = &geojson["features"][0];
        assert_eq!(kenya["id"], "KEN");
        assert_eq!(kenya["geometry"]["type"], "MultiPolygon");
        let props = &kenya["properties"];
        assert_eq!(props["fillColor"], json!("#ffa500"));
        assert_eq!(props["fillOpacity"], json!(0.7));
        assert_eq!(props["dashArray"], json!("3"));
        assert_eq!(props["year"], json!(2020));
        assert!(props["tooltip"].as_str().unwrap().contains("15.00"));

        let tanzania = &geojson["features"][1]["properties"];
        assert_eq!(tanzania["matched"], json!(false));
        assert_eq!(tanzania["fillOpacity"], json!(0.0));
        assert_eq!(tanzania["tooltip"], json!(null));
    }
}
