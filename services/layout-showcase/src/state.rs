//! Application state for the showcase service.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use map_layout::{
    AppMetadata, AppWorkspace, GeocodeKey, LayerComposer, MapLayoutView, SettingsProvider,
    StaticSettings,
};

use crate::config::ShowcaseConfig;
use crate::handlers::quick_start::render_quick_start;

/// Shared application state.
pub struct AppState {
    /// App name, routes and declared settings.
    pub app: AppMetadata,

    /// Rendered landing page.
    pub landing_page: String,

    /// View configuration echoed to the client.
    pub view: MapLayoutView,

    /// Settings lookups for the composer and the view.
    pub settings: Arc<dyn SettingsProvider>,

    /// Per-request layer composition.
    pub composer: LayerComposer,

    /// Directory holding bundled resources.
    pub workspace: AppWorkspace,

    /// Memoised geocoding API key.
    pub geocode_key: GeocodeKey,

    /// Renders `/metrics`; absent when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new AppState from loaded configuration.
    pub fn new(
        config: ShowcaseConfig,
        workspace_dir: impl Into<PathBuf>,
        prometheus: Option<PrometheusHandle>,
    ) -> Result<Self> {
        let app = AppMetadata::layout_showcase();

        let settings: Arc<dyn SettingsProvider> = Arc::new(
            StaticSettings::new(app.settings(), config.settings)
                .context("Invalid app settings")?,
        );

        let landing_page = render_quick_start(&app).context("Failed to render landing page")?;

        let mut view = config.view;
        view.back_url = app.index_path().context("App index route missing")?;
        view.validate().context("Invalid map view configuration")?;

        let composer = LayerComposer::new(Arc::clone(&settings), config.composer)
            .with_style_map(view.vector_style_map.clone());

        let workspace = AppWorkspace::new(workspace_dir);
        let geojson_path = &composer.config().geojson.path;
        if workspace.has_file(geojson_path) {
            info!(workspace = %workspace.path().display(), "Using app workspace");
        } else {
            warn!(
                workspace = %workspace.path().display(),
                file = %geojson_path,
                "GeoJSON resource missing; map layout requests will fail"
            );
        }

        Ok(Self {
            app,
            landing_page,
            view,
            settings,
            composer,
            workspace,
            geocode_key: GeocodeKey::new(),
            prometheus,
        })
    }

    /// True when the bundled GeoJSON resource is present.
    pub fn workspace_ready(&self) -> bool {
        self.workspace
            .has_file(&self.composer.config().geojson.path)
    }
}
