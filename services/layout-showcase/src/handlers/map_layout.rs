//! Map layout handler.

use axum::{extract::Extension, http::Uri, Json};
use layout_common::{LayerDescriptor, LayerGroup};
use map_layout::{MapLayoutView, RequestContext, UserMessage};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// Everything the map client needs to draw the page.
#[derive(Debug, Serialize)]
pub struct MapLayoutResponse {
    pub app: String,
    /// View settings, including the geocoding key when one is set
    pub view: MapLayoutView,
    pub layers: Vec<LayerDescriptor>,
    pub layer_groups: Vec<LayerGroup>,
    pub messages: Vec<UserMessage>,
}

/// GET /layout-showcase/map-layout - View configuration plus composed layers
pub async fn map_layout_handler(
    Extension(state): Extension<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<MapLayoutResponse>, ApiError> {
    let mut request = RequestContext::new(uri.path());

    let composition = match state.composer.compose(&mut request, &state.workspace).await {
        Ok(composition) => composition,
        Err(e) => {
            metrics::record_composition_failure();
            return Err(e.into());
        }
    };
    metrics::record_composition(composition.wms_layers().next().is_some());

    let geocode_api_key = state.geocode_key.get(state.settings.as_ref()).await;

    Ok(Json(MapLayoutResponse {
        app: state.app.name.clone(),
        view: state.view.with_geocode_api_key(geocode_api_key),
        layers: composition.layers,
        layer_groups: composition.layer_groups,
        messages: request.take_messages(),
    }))
}
