use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::{feature::FeatureKeys, record::MIN_WIDE_YEAR, table::DEFAULT_ROWS_PER_PAGE};

/// Runtime settings for loading and displaying datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend REST service root.
    pub base_url: String,
    pub rows_per_page: usize,
    pub min_wide_year: i32,
    pub feature_keys: FeatureKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://ganzbe.onrender.com".to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            min_wide_year: MIN_WIDE_YEAR,
            feature_keys: FeatureKeys::default(),
        }
    }
}

impl Config {
    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("[config] Invalid config JSON")?;
        ensure!(config.rows_per_page > 0, "[config] rows_per_page must be positive");
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Failed to load {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::from_json_str(r#"{"rows_per_page": 50, "feature_keys": {"code": "ADM0_A3"}}"#).unwrap();
        assert_eq!(config.rows_per_page, 50);
        assert_eq!(config.feature_keys.code, "ADM0_A3");
        assert_eq!(config.feature_keys.name, "ADMIN");
        assert_eq!(config.base_url, "https://ganzbe.onrender.com");
        assert_eq!(config.min_wide_year, 1961);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Config::from_json_str(r#"{"rows_per_page": 0}"#).is_err());
        assert!(Config::from_json_str("not json").is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geodash.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(Config::from_json_file(&path).unwrap(), Config::default());
    }
}
