//! Layer descriptors emitted to the map client.

use geojson::GeoJson;
use serde::{Deserialize, Serialize};

use crate::{BoundingBox, VectorStyleMap};

/// Layer name as understood by the serving map server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of map server behind a WMS endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    #[default]
    Geoserver,
    Thredds,
    Generic,
}

/// WMS request parameters passed through to the client source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsParams {
    #[serde(rename = "LAYERS")]
    pub layers: String,
}

/// Where a layer's imagery or features come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum LayerSource {
    /// Rendered imagery from an OGC WMS endpoint
    #[serde(rename = "ImageWMS")]
    Wms {
        url: String,
        server_type: ServerType,
        params: WmsParams,
    },

    /// Inline vector features
    #[serde(rename = "GeoJSON")]
    GeoJson { features: GeoJson },

    /// Rendered imagery from an ArcGIS REST MapServer
    #[serde(rename = "ImageArcGISRest")]
    ArcGisRest { url: String },
}

/// A map layer as handed to the map-rendering client.
///
/// Built once per request and never mutated after composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub name: LayerId,
    pub title: String,
    /// Variable the layer displays; used to pick the plot for a clicked feature
    pub variable: String,
    #[serde(flatten)]
    pub source: LayerSource,
    pub visible: bool,
    pub selectable: bool,
    pub plottable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_attribute: Option<String>,
    /// Feature properties hidden from the properties popup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_map: Option<VectorStyleMap>,
}

impl LayerDescriptor {
    fn with_source(
        source: LayerSource,
        name: impl Into<String>,
        title: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        Self {
            name: LayerId::new(name),
            title: title.into(),
            variable: variable.into(),
            source,
            visible: true,
            selectable: false,
            plottable: false,
            extent: None,
            geometry_attribute: None,
            excluded_properties: Vec::new(),
            style_map: None,
        }
    }

    /// A WMS layer served by `endpoint`.
    pub fn wms(
        endpoint: impl Into<String>,
        server_type: ServerType,
        layer_name: impl Into<String>,
        title: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        let layer_name = layer_name.into();
        let source = LayerSource::Wms {
            url: endpoint.into(),
            server_type,
            params: WmsParams {
                layers: layer_name.clone(),
            },
        };
        Self::with_source(source, layer_name, title, variable)
    }

    /// A vector layer carrying its features inline.
    pub fn geojson(
        features: GeoJson,
        layer_name: impl Into<String>,
        title: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        Self::with_source(LayerSource::GeoJson { features }, layer_name, title, variable)
    }

    /// An ArcGIS REST MapServer layer.
    pub fn arc_gis(
        endpoint: impl Into<String>,
        layer_name: impl Into<String>,
        title: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        let source = LayerSource::ArcGisRest {
            url: endpoint.into(),
        };
        Self::with_source(source, layer_name, title, variable)
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_plottable(mut self, plottable: bool) -> Self {
        self.plottable = plottable;
        self
    }

    pub fn with_extent(mut self, extent: BoundingBox) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_geometry_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.geometry_attribute = Some(attribute.into());
        self
    }

    pub fn with_excluded_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style_map(mut self, style_map: VectorStyleMap) -> Self {
        self.style_map = Some(style_map);
        self
    }

    pub fn is_wms(&self) -> bool {
        matches!(self.source, LayerSource::Wms { .. })
    }
}
