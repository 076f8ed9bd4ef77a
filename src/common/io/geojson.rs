use anyhow::{Context, Result, anyhow};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Value, json};

/// Parse a GeoJSON geometry object into a MultiPolygon.
/// Polygons are promoted to single-member MultiPolygons; other geometry types yield `None`.
pub(crate) fn parse_areal_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = || geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] Geometry is missing its coordinates array"));

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon_coords(coords()?)?]))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|polygon| {
                    let rings = polygon.as_array()
                        .ok_or_else(|| anyhow!("[io::geojson] MultiPolygon member is not an array"))?;
                    parse_polygon_coords(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Parse polygon rings: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| anyhow!("[io::geojson] Polygon ring is not an array"))
            .and_then(|ring| parse_ring_coords(ring))
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[io::geojson] Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON coordinates: `[[x, y], [x, y], ...]`.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for pair in coords {
        let pair = pair.as_array()
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| anyhow!("[io::geojson] Invalid position: expected [x, y]"))?;
        let x = pair[0].as_f64()
            .ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64()
            .ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}

/// Convert a MultiPolygon to a GeoJSON geometry object.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>();

    let polygons = mp.0.iter()
        .map(|polygon| {
            std::iter::once(ring(polygon.exterior()))
                .chain(polygon.interiors().iter().map(ring))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

/// Parse GeoJSON text into a FeatureCollection's feature array.
pub(crate) fn read_feature_array(bytes: &[u8]) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_slice(bytes)
        .context("[io::geojson] Failed to parse GeoJSON bytes")?;

    match value {
        Value::Object(mut collection) if collection.get("type").and_then(Value::as_str) == Some("FeatureCollection") => {
            match collection.remove("features") {
                Some(Value::Array(features)) => Ok(features),
                _ => Err(anyhow!("[io::geojson] FeatureCollection has no features array")),
            }
        }
        _ => Err(anyhow!("[io::geojson] GeoJSON must be a FeatureCollection")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_is_promoted_and_closed() {
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
        });
        let mp = parse_areal_geometry(&geometry).unwrap().unwrap();
        assert_eq!(mp.0.len(), 1);
        let exterior = mp.0[0].exterior();
        assert_eq!(exterior.0.len(), 4);
        assert_eq!(exterior.0.first(), exterior.0.last());
    }

    #[test]
    fn multipolygon_keeps_holes() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                 [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
            ],
        });
        let mp = parse_areal_geometry(&geometry).unwrap().unwrap();
        assert_eq!(mp.0.len(), 2);
        assert_eq!(mp.0[0].interiors().len(), 1);

        let back = multipolygon_to_geojson(&mp);
        assert_eq!(back["coordinates"], geometry["coordinates"]);
    }

    #[test]
    fn point_geometries_are_ignored() {
        let geometry = json!({ "type": "Point", "coordinates": [1.0, 2.0] });
        assert!(parse_areal_geometry(&geometry).unwrap().is_none());
    }

    #[test]
    fn bad_coordinates_are_errors() {
        let geometry = json!({ "type": "Polygon", "coordinates": [[[0.0, "x"]]] });
        assert!(parse_areal_geometry(&geometry).is_err());
    }

    #[test]
    fn feature_array_requires_collection() {
        assert!(read_feature_array(br#"{"type": "Feature"}"#).is_err());
        let features = read_feature_array(br#"{"type": "FeatureCollection", "features": [{}]}"#).unwrap();
        assert_eq!(features.len(), 1);
    }
}
