//! Service configuration loading and types.

use anyhow::{Context, Result};
use map_layout::{ComposerConfig, MapLayoutView, SettingsStore};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration loaded from a YAML file.
///
/// Every section is optional; omitted sections keep the showcase defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Persisted app settings (custom settings, services, assignments).
    pub settings: SettingsStore,

    /// Layer composition overrides.
    pub composer: ComposerConfig,

    /// Map view overrides.
    pub view: MapLayoutView,
}

impl ShowcaseConfig {
    /// Load configuration from a YAML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If the file doesn't exist, return default config
        if !path.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;

        tracing::info!(
            services = config.settings.spatial_dataset_services.len(),
            assignments = config.settings.setting_assignments.len(),
            "Loaded showcase config from {:?}",
            path
        );

        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ShowcaseConfig::load_from_file("/nonexistent/layout-showcase.yaml").unwrap();
        assert!(config.settings.setting_assignments.is_empty());
        assert_eq!(config.view.map_title, "Map Layout");
    }

    #[test]
    fn test_parse_settings_section() {
        let yaml = r#"
settings:
  custom_settings:
    geocode_api_key: "abc123"
  spatial_dataset_services:
    local_geoserver:
      engine: geoserver
      endpoint: "http://geoserver:8080/geoserver/rest/"
      public_endpoint: "http://localhost:8181/geoserver/rest/"
  setting_assignments:
    primary_geoserver: local_geoserver
view:
  map_subtitle: "Demo"
"#;
        let config = ShowcaseConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.settings.custom_settings["geocode_api_key"], "abc123");
        assert_eq!(
            config.settings.setting_assignments["primary_geoserver"],
            "local_geoserver"
        );
        assert_eq!(config.view.map_subtitle, "Demo");
        assert_eq!(config.view.map_title, "Map Layout");
        assert_eq!(config.composer.wms.layer_name, "topp:states");
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(ShowcaseConfig::from_yaml("settings: [unclosed").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout-showcase.yaml");
        std::fs::write(&path, "composer:\n  group:\n    display_name: Overlays\n").unwrap();

        let config = ShowcaseConfig::load_from_file(&path).unwrap();
        assert_eq!(config.composer.group.display_name, "Overlays");
    }
}
