//! Map layout view configuration.

use layout_common::style::StyleSpec;
use layout_common::{Basemap, BoundingBox, LayoutError, LayoutResult, VectorStyleMap};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

use crate::{SettingsProvider, GEOCODE_API_KEY_SETTING};

const USA_EXTENT: BoundingBox = BoundingBox::new(-127.26563, 23.56399, -66.09375, 50.51343);

/// Declarative view settings echoed to the map client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayoutView {
    pub map_title: String,
    pub map_subtitle: String,
    /// Where the "back" button leads
    pub back_url: String,
    pub basemaps: Vec<Basemap>,
    /// `[lon, lat]`
    pub default_center: [f64; 2],
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub initial_map_extent: BoundingBox,
    pub geocode_extent: BoundingBox,
    pub feature_selection_multiselect: bool,
    pub show_properties_popup: bool,
    pub show_map_clicks: bool,
    pub show_map_click_popup: bool,
    pub plot_slide_sheet: bool,
    pub geoserver_workspace: String,
    pub vector_style_map: VectorStyleMap,
    /// Filled per request from the `geocode_api_key` setting
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub geocode_api_key: Option<String>,
}

impl Default for MapLayoutView {
    fn default() -> Self {
        Self {
            map_title: "Map Layout".to_string(),
            map_subtitle: "Showcase".to_string(),
            back_url: "/layout-showcase".to_string(),
            basemaps: vec![
                Basemap::named("OpenStreetMap"),
                Basemap::named("ESRI"),
                Basemap::named("Stamen"),
                Basemap::configured("Stamen", "toner", "Black and White"),
            ],
            default_center: [-98.583, 39.833],
            default_zoom: 5,
            min_zoom: 2,
            max_zoom: 16,
            initial_map_extent: USA_EXTENT,
            geocode_extent: USA_EXTENT,
            feature_selection_multiselect: true,
            show_properties_popup: true,
            show_map_clicks: false,
            show_map_click_popup: false,
            plot_slide_sheet: true,
            geoserver_workspace: "topp".to_string(),
            vector_style_map: default_vector_style_map(),
            geocode_api_key: None,
        }
    }
}

/// Orange multipolygons, green polygons.
pub fn default_vector_style_map() -> VectorStyleMap {
    VectorStyleMap::new()
        .with_style(
            "MultiPolygon",
            StyleSpec::outlined("orange", 3, "rgba(255, 140, 0, 0.1)"),
        )
        .with_style(
            "Polygon",
            StyleSpec::outlined("green", 3, "rgba(0, 255, 0, 0.1)"),
        )
}

impl MapLayoutView {
    /// Copy of the view carrying the geocoding key for one response.
    pub fn with_geocode_api_key(&self, key: Option<String>) -> Self {
        Self {
            geocode_api_key: key,
            ..self.clone()
        }
    }

    /// Reject settings the client cannot honour together.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.min_zoom > self.max_zoom {
            return Err(LayoutError::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.default_zoom < self.min_zoom || self.default_zoom > self.max_zoom {
            return Err(LayoutError::InvalidConfig(format!(
                "default_zoom {} outside [{}, {}]",
                self.default_zoom, self.min_zoom, self.max_zoom
            )));
        }
        // Both popups bind to the same click event
        if self.show_properties_popup && self.show_map_click_popup {
            return Err(LayoutError::InvalidConfig(
                "show_properties_popup and show_map_click_popup cannot both be enabled"
                    .to_string(),
            ));
        }
        let [lon, lat] = self.default_center;
        if !self.initial_map_extent.contains_point(lon, lat) {
            return Err(LayoutError::InvalidConfig(format!(
                "default_center [{}, {}] lies outside initial_map_extent",
                lon, lat
            )));
        }
        self.vector_style_map
            .validate()
            .map_err(LayoutError::InvalidConfig)
    }
}

/// Geocoding API key, looked up on first use and kept once found.
#[derive(Debug, Default)]
pub struct GeocodeKey {
    cached: RwLock<Option<String>>,
}

impl GeocodeKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current key. An unset key is looked up again on the next call.
    pub async fn get(&self, settings: &dyn SettingsProvider) -> Option<String> {
        if let Some(key) = self.cached.read().await.as_ref() {
            return Some(key.clone());
        }

        let key = match settings.custom_setting(GEOCODE_API_KEY_SETTING).await {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "Geocode API key lookup failed");
                None
            }
        };

        if let Some(ref key) = key {
            *self.cached.write().await = Some(key.clone());
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppMetadata, SettingsStore, StaticSettings};

    #[test]
    fn test_default_view_is_valid() {
        let view = MapLayoutView::default();
        assert!(view.validate().is_ok());
        assert_eq!(view.basemaps.len(), 4);
        assert!(!view.vector_style_map.is_empty());
    }

    #[test]
    fn test_popup_conflict_rejected() {
        let view = MapLayoutView {
            show_map_click_popup: true,
            ..Default::default()
        };
        assert!(matches!(view.validate(), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_zoom_bounds_rejected() {
        let inverted = MapLayoutView {
            min_zoom: 10,
            max_zoom: 4,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let outside = MapLayoutView {
            default_zoom: 18,
            ..Default::default()
        };
        assert!(outside.validate().is_err());
    }

    #[test]
    fn test_center_outside_extent_rejected() {
        let view = MapLayoutView {
            default_center: [2.35, 48.85],
            ..Default::default()
        };
        assert!(view.validate().is_err());
    }

    #[test]
    fn test_center_check_ignores_extent_corner_order() {
        let view = MapLayoutView {
            initial_map_extent: BoundingBox::new(-63.69, 12.81, -129.17, 49.38),
            ..Default::default()
        };
        assert!(view.validate().is_ok());
    }

    #[test]
    fn test_geocode_key_from_static_settings() {
        let mut store = SettingsStore::default();
        store
            .custom_settings
            .insert(GEOCODE_API_KEY_SETTING.to_string(), "abc123".to_string());
        let settings = StaticSettings::new(AppMetadata::layout_showcase().settings(), store).unwrap();

        let key = GeocodeKey::new();
        let value = tokio_test::block_on(key.get(&settings));
        assert_eq!(value.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_geocode_key_serialized_only_when_set() {
        let view = MapLayoutView::default();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("geocode_api_key").is_none());

        let json = serde_json::to_value(view.with_geocode_api_key(Some("k1".to_string()))).unwrap();
        assert_eq!(json["geocode_api_key"], "k1");
    }

    #[test]
    fn test_geocode_key_not_read_from_config() {
        let view: MapLayoutView =
            serde_json::from_str(r#"{"map_title": "Custom", "geocode_api_key": "leaked"}"#).unwrap();
        assert_eq!(view.map_title, "Custom");
        assert!(view.geocode_api_key.is_none());
    }

    #[test]
    fn test_style_map_colors() {
        let styles = serde_json::to_value(default_vector_style_map()).unwrap();
        assert_eq!(styles.as_object().unwrap().len(), 2);

        let multi = &styles["MultiPolygon"]["ol.style.Style"];
        assert_eq!(multi["stroke"]["ol.style.Stroke"]["color"], "orange");
        assert_eq!(multi["stroke"]["ol.style.Stroke"]["width"], 3);
        assert_eq!(multi["fill"]["ol.style.Fill"]["color"], "rgba(255, 140, 0, 0.1)");

        let polygon = &styles["Polygon"]["ol.style.Style"];
        assert_eq!(polygon["stroke"]["ol.style.Stroke"]["color"], "green");
    }
}
