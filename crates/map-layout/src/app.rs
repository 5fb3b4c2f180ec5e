//! Application metadata, declared settings and the URL map.

use layout_common::{LayoutError, LayoutResult};
use serde::Serialize;

use crate::{GEOCODE_API_KEY_SETTING, PRIMARY_GEOSERVER_SETTING};

/// What kind of value a declared setting holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingKind {
    /// Free-form string value
    String,
    /// Reference to a spatial dataset service of the given engine
    SpatialDatasetService { engine: String },
}

/// A setting the app expects the administrator to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingDeclaration {
    pub name: String,
    pub description: String,
    pub kind: SettingKind,
    pub required: bool,
}

impl SettingDeclaration {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: SettingKind::String,
            required: false,
        }
    }

    pub fn spatial_dataset_service(
        name: impl Into<String>,
        description: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: SettingKind::SpatialDatasetService {
                engine: engine.into(),
            },
            required: false,
        }
    }

    pub fn is_spatial(&self) -> bool {
        matches!(self.kind, SettingKind::SpatialDatasetService { .. })
    }
}

/// A named route of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlMap {
    pub name: String,
    pub path: String,
}

/// Static description of the app.
#[derive(Debug, Clone, Serialize)]
pub struct AppMetadata {
    pub name: String,
    /// URL map name of the landing page, namespaced by package
    pub index: String,
    pub icon: String,
    pub package: String,
    pub root_url: String,
    pub color: String,
    pub description: String,
    pub tags: Vec<String>,
    pub enable_feedback: bool,
    pub feedback_emails: Vec<String>,
}

impl AppMetadata {
    pub fn layout_showcase() -> Self {
        Self {
            name: "Layout Showcase".to_string(),
            index: "layout_showcase:quick_start".to_string(),
            icon: "layout_showcase/images/icon.gif".to_string(),
            package: "layout_showcase".to_string(),
            root_url: "layout-showcase".to_string(),
            color: "#045c34".to_string(),
            description: "A Tethys app that demonstrates how to use various layout views."
                .to_string(),
            tags: Vec::new(),
            enable_feedback: false,
            feedback_emails: Vec::new(),
        }
    }

    /// Routes served by the app, landing page first.
    pub fn url_maps(&self) -> Vec<UrlMap> {
        let root = format!("/{}", self.root_url.trim_matches('/'));
        vec![
            UrlMap {
                name: "quick_start".to_string(),
                path: root.clone(),
            },
            UrlMap {
                name: "map_layout".to_string(),
                path: format!("{}/map-layout", root),
            },
            UrlMap {
                name: "map_layout_plot_data".to_string(),
                path: format!("{}/map-layout/plot-data", root),
            },
        ]
    }

    /// Resolve a URL map name ("quick_start" or "layout_showcase:quick_start") to its path.
    pub fn reverse(&self, name: &str) -> LayoutResult<String> {
        let bare = match name.split_once(':') {
            Some((namespace, rest)) if namespace == self.package => rest,
            Some(_) => return Err(LayoutError::RouteNotFound(name.to_string())),
            None => name,
        };
        self.url_maps()
            .into_iter()
            .find(|m| m.name == bare)
            .map(|m| m.path)
            .ok_or_else(|| LayoutError::RouteNotFound(name.to_string()))
    }

    /// Path of the landing page.
    pub fn index_path(&self) -> LayoutResult<String> {
        self.reverse(&self.index)
    }

    /// Settings the administrator may assign. None of them are required.
    pub fn settings(&self) -> Vec<SettingDeclaration> {
        vec![
            SettingDeclaration::string(
                GEOCODE_API_KEY_SETTING,
                "API key for the geocoding service used by the map search box.",
            ),
            SettingDeclaration::spatial_dataset_service(
                PRIMARY_GEOSERVER_SETTING,
                "GeoServer that serves the WMS layer example.",
                "geoserver",
            ),
        ]
    }
}
