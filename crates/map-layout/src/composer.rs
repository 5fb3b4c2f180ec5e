//! Per-request layer composition.

use layout_common::{LayerDescriptor, LayerGroup, LayoutResult, VectorStyleMap};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ComposerConfig;
use crate::{AppWorkspace, RequestContext, SettingsProvider};

/// Layers for the map plus the groups that drive the layer control.
#[derive(Debug, Clone, Serialize)]
pub struct Composition {
    pub layers: Vec<LayerDescriptor>,
    pub layer_groups: Vec<LayerGroup>,
}

impl Composition {
    pub fn wms_layers(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.iter().filter(|l| l.is_wms())
    }
}

/// Builds the layer set for one page load.
///
/// Holds no per-request state; every call starts from configuration.
pub struct LayerComposer {
    settings: Arc<dyn SettingsProvider>,
    config: ComposerConfig,
    style_map: VectorStyleMap,
}

impl LayerComposer {
    pub fn new(settings: Arc<dyn SettingsProvider>, config: ComposerConfig) -> Self {
        Self {
            settings,
            config,
            style_map: VectorStyleMap::new(),
        }
    }

    /// Style applied to the GeoJSON layer's features.
    pub fn with_style_map(mut self, style_map: VectorStyleMap) -> Self {
        self.style_map = style_map;
        self
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose layers and groups.
    ///
    /// An unassigned GeoServer setting drops the WMS layer and queues a
    /// warning on `request`. Failing to read or parse the GeoJSON resource
    /// fails the whole composition.
    pub async fn compose(
        &self,
        request: &mut RequestContext,
        workspace: &AppWorkspace,
    ) -> LayoutResult<Composition> {
        let wms_layer = self.wms_layer(request).await?;
        let geojson_layer = self.geojson_layer(workspace, wms_layer.is_none())?;
        let arc_gis_layer = self.arc_gis_layer();

        let layers: Vec<LayerDescriptor> = wms_layer
            .into_iter()
            .chain([geojson_layer, arc_gis_layer])
            .collect();

        let group = &self.config.group;
        let layer_groups = vec![LayerGroup::new(
            group.id.clone(),
            group.display_name.clone(),
            group.control,
            layers.clone(),
        )];

        info!(
            path = %request.path,
            layers = layers.len(),
            groups = layer_groups.len(),
            "Composed map layers"
        );

        Ok(Composition {
            layers,
            layer_groups,
        })
    }

    async fn wms_layer(&self, request: &mut RequestContext) -> LayoutResult<Option<LayerDescriptor>> {
        let endpoint = match self
            .settings
            .spatial_dataset_service(&self.config.geoserver_setting, true, true)
            .await
        {
            Ok(endpoint) => endpoint,
            Err(e) if e.is_not_assigned() => {
                warn!(setting = %self.config.geoserver_setting, "GeoServer setting not assigned, skipping WMS layer");
                request.warning(self.config.unassigned_warning.clone());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let wms = &self.config.wms;
        debug!(endpoint = %endpoint, layer = %wms.layer_name, "Building WMS layer");

        let layer = LayerDescriptor::wms(
            endpoint,
            wms.server_type,
            wms.layer_name.clone(),
            wms.title.clone(),
            wms.variable.clone(),
        )
        .with_visible(wms.visible)
        .with_selectable(wms.selectable)
        .with_plottable(wms.plottable)
        .with_geometry_attribute(wms.geometry_attribute.clone())
        .with_excluded_properties(wms.excluded_properties.iter().cloned());

        Ok(Some(layer))
    }

    fn geojson_layer(&self, workspace: &AppWorkspace, visible: bool) -> LayoutResult<LayerDescriptor> {
        let cfg = &self.config.geojson;
        let features = workspace.read_geojson(&cfg.path)?;

        let mut layer = LayerDescriptor::geojson(
            features,
            cfg.layer_name.clone(),
            cfg.title.clone(),
            cfg.variable.clone(),
        )
        .with_selectable(cfg.selectable)
        .with_visible(visible)
        .with_extent(cfg.extent)
        .with_plottable(cfg.plottable);

        if !self.style_map.is_empty() {
            layer = layer.with_style_map(self.style_map.clone());
        }
        Ok(layer)
    }

    fn arc_gis_layer(&self) -> LayerDescriptor {
        let cfg = &self.config.arc_gis;
        LayerDescriptor::arc_gis(
            cfg.endpoint.clone(),
            cfg.layer_name.clone(),
            cfg.title.clone(),
            cfg.variable.clone(),
        )
        .with_visible(cfg.visible)
        .with_extent(cfg.extent)
    }
}
