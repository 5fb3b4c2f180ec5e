//! Plot data handler for clicked features.

use axum::{extract::Query, Json};
use layout_common::{LayoutError, PlotData};
use serde::Deserialize;

use crate::error::ApiError;
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct PlotQuery {
    pub layer_name: Option<String>,
    pub feature_id: Option<String>,
}

/// GET /layout-showcase/map-layout/plot-data?layer_name=..&feature_id=..
pub async fn plot_data_handler(Query(query): Query<PlotQuery>) -> Result<Json<PlotData>, ApiError> {
    let layer_name = query
        .layer_name
        .ok_or_else(|| LayoutError::MissingParameter("layer_name".to_string()))?;
    let feature_id = query
        .feature_id
        .ok_or_else(|| LayoutError::MissingParameter("feature_id".to_string()))?;

    metrics::record_plot_request();
    Ok(Json(map_layout::plot_for_layer_feature(&layer_name, &feature_id)))
}
