//! Layout Showcase Service Library
//!
//! HTTP surface of the map layout showcase: the landing page, the composed
//! map layout, plot data for clicked features, and health/metrics endpoints.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod state;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use state::AppState;

/// Build the router: app routes from the URL map, then service routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    for url_map in state.app.url_maps() {
        router = match url_map.name.as_str() {
            "quick_start" => router.route(
                &url_map.path,
                get(handlers::quick_start::quick_start_handler),
            ),
            "map_layout" => router.route(
                &url_map.path,
                get(handlers::map_layout::map_layout_handler),
            ),
            "map_layout_plot_data" => {
                router.route(&url_map.path, get(handlers::plot::plot_data_handler))
            }
            other => {
                debug!(name = other, "No handler for URL map");
                router
            }
        };
    }

    router
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
