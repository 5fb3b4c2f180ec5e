//! Layer composition configuration.
//!
//! Defaults reproduce the showcase layer set; any field can be overridden
//! from the service's YAML configuration.

use layout_common::{BoundingBox, LayerControl, ServerType};
use serde::{Deserialize, Serialize};

use crate::PRIMARY_GEOSERVER_SETTING;

/// Everything the composer needs besides the settings provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Spatial dataset service setting that locates the WMS server
    pub geoserver_setting: String,
    /// Warning shown when that setting is unassigned
    pub unassigned_warning: String,
    pub wms: WmsLayerConfig,
    pub geojson: GeoJsonLayerConfig,
    pub arc_gis: ArcGisLayerConfig,
    pub group: LayerGroupConfig,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            geoserver_setting: PRIMARY_GEOSERVER_SETTING.to_string(),
            unassigned_warning: "Assign a GeoServer in app settings to see a WMS layer example."
                .to_string(),
            wms: WmsLayerConfig::default(),
            geojson: GeoJsonLayerConfig::default(),
            arc_gis: ArcGisLayerConfig::default(),
            group: LayerGroupConfig::default(),
        }
    }
}

/// WMS layer served by the assigned GeoServer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WmsLayerConfig {
    pub server_type: ServerType,
    pub layer_name: String,
    pub title: String,
    pub variable: String,
    pub visible: bool,
    pub selectable: bool,
    pub plottable: bool,
    pub geometry_attribute: String,
    pub excluded_properties: Vec<String>,
}

impl Default for WmsLayerConfig {
    fn default() -> Self {
        Self {
            server_type: ServerType::Geoserver,
            layer_name: "topp:states".to_string(),
            title: "WMS Layer".to_string(),
            variable: "population".to_string(),
            visible: true,
            selectable: true,
            plottable: true,
            geometry_attribute: "the_geom".to_string(),
            excluded_properties: vec!["STATE_FIPS".to_string(), "SUB_REGION".to_string()],
        }
    }
}

/// Vector layer read from the app workspace.
///
/// Visibility is not configurable: the layer is visible only when no WMS
/// layer was composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoJsonLayerConfig {
    /// Path of the GeoJSON file, relative to the app workspace
    pub path: String,
    pub layer_name: String,
    pub title: String,
    pub variable: String,
    pub selectable: bool,
    pub plottable: bool,
    pub extent: BoundingBox,
}

impl Default for GeoJsonLayerConfig {
    fn default() -> Self {
        Self {
            path: "map_layout/us-states.json".to_string(),
            layer_name: "us-states".to_string(),
            title: "GeoJSON Layer".to_string(),
            variable: "reference".to_string(),
            selectable: true,
            plottable: true,
            extent: BoundingBox::new(-63.69, 12.81, -129.17, 49.38),
        }
    }
}

/// ArcGIS REST MapServer layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcGisLayerConfig {
    pub endpoint: String,
    pub layer_name: String,
    pub title: String,
    pub variable: String,
    pub visible: bool,
    pub extent: BoundingBox,
}

impl Default for ArcGisLayerConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://sampleserver1.arcgisonline.com/ArcGIS/rest/services/Specialty/ESRI_StateCityHighway_USA/MapServer".to_string(),
            layer_name: "ESRI_StateCityHighway".to_string(),
            title: "ArcGIS Layer".to_string(),
            variable: "highways".to_string(),
            visible: false,
            extent: BoundingBox::new(-173.0, 17.0, -65.0, 72.0),
        }
    }
}

/// The single group holding every composed layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerGroupConfig {
    pub id: String,
    pub display_name: String,
    pub control: LayerControl,
}

impl Default for LayerGroupConfig {
    fn default() -> Self {
        Self {
            id: "usa-layer-group".to_string(),
            display_name: "Layers".to_string(),
            control: LayerControl::Radio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
wms:
  layer_name: "topp:tasmania_roads"
group:
  display_name: "Overlays"
"#;
        let config: ComposerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.wms.layer_name, "topp:tasmania_roads");
        assert_eq!(config.wms.variable, "population");
        assert_eq!(config.group.display_name, "Overlays");
        assert_eq!(config.group.control, LayerControl::Radio);
        assert_eq!(config.geojson.extent, BoundingBox::new(-63.69, 12.81, -129.17, 49.38));
    }

    #[test]
    fn test_extent_from_yaml_array() {
        let yaml = "arc_gis:\n  extent: [-170, 15, -60, 75]\n";
        let config: ComposerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.arc_gis.extent.to_array(), [-170.0, 15.0, -60.0, 75.0]);
    }
}
