use std::{fs, path::Path, sync::Arc};

use ahash::AHashMap;
use anyhow::{Context, Result};
use geo::{BoundingRect, MultiPolygon, Rect};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::common::{parse_areal_geometry, read_feature_array};

/// Property names holding the join code and display name of each feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureKeys {
    pub code: String,
    pub name: String,
}

impl Default for FeatureKeys {
    fn default() -> Self {
        Self { code: "ISO_A3".to_string(), name: "ADMIN".to_string() }
    }
}

/// One territory polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub iso_code: Arc<str>,
    pub admin_name: Arc<str>,
    pub geometry: MultiPolygon<f64>,
}

/// Immutable country polygon collection, indexed by ISO code.
#[derive(Debug, Clone, Default)]
pub struct GeoFeatureStore {
    features: Arc<[GeoFeature]>,
    index: AHashMap<Arc<str>, usize>,
}

impl GeoFeatureStore {
    pub fn new(features: Vec<GeoFeature>) -> Self {
        let index = features.iter().enumerate()
            .map(|(i, feature)| (feature.iso_code.clone(), i))
            .collect();
        Self { features: features.into(), index }
    }

    /// Load a GeoJSON FeatureCollection from `path` using the default property keys.
    pub fn from_geojson_file(path: &Path) -> Result<Self> {
        Self::from_geojson_file_with_keys(path, &FeatureKeys::default())
    }

    pub fn from_geojson_file_with_keys(path: &Path, keys: &FeatureKeys) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("[feature::store] Failed to read GeoJSON file: {}", path.display()))?;
        let store = Self::from_geojson_bytes_with_keys(&bytes, keys)
            .with_context(|| format!("[feature::store] Invalid GeoJSON file: {}", path.display()))?;
        info!(path = %path.display(), features = store.len(), "loaded feature collection");
        Ok(store)
    }

    /// Parse GeoJSON bytes using the default property keys.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_geojson_bytes_with_keys(bytes, &FeatureKeys::default())
    }

    /// Parse GeoJSON bytes. Features without a code property or without areal geometry are skipped.
    pub fn from_geojson_bytes_with_keys(bytes: &[u8], keys: &FeatureKeys) -> Result<Self> {
        let raw = read_feature_array(bytes)?;
        let total = raw.len();

        let mut features = Vec::with_capacity(total);
        for (i, feature) in raw.iter().enumerate() {
            let properties = &feature["properties"];
            let Some(iso_code) = property_text(properties, &keys.code) else { continue };

            let geometry = parse_areal_geometry(&feature["geometry"])
                .with_context(|| format!("[feature::store] Feature {i} ({iso_code}) has invalid geometry"))?;
            let Some(geometry) = geometry else { continue };

            let admin_name = property_text(properties, &keys.name).unwrap_or_else(|| iso_code.clone());
            features.push(GeoFeature {
                iso_code: iso_code.into(),
                admin_name: admin_name.into(),
                geometry,
            });
        }

        if features.len() < total {
            debug!(skipped = total - features.len(), "skipped features without code or areal geometry");
        }
        Ok(Self::new(features))
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[GeoFeature] { &self.features }

    /// Look up a feature by its code.
    pub fn get(&self, iso_code: &str) -> Option<&GeoFeature> {
        self.index.get(iso_code).map(|&i| &self.features[i])
    }

    /// Bounding box of all feature geometry.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        bounds_of(self.features.iter().map(|f| &f.geometry))
    }
}

/// Union of the bounding boxes of `geometries`.
pub(crate) fn bounds_of<'a>(geometries: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    geometries.into_iter()
        .filter_map(|mp| mp.bounding_rect())
        .reduce(|a, b| Rect::new(
            geo::coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            geo::coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        ))
}

/// Text of a string or numeric property, trimmed; blank values count as absent.
fn property_text(properties: &Value, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
