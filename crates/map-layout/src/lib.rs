//! Map layout showcase core.
//!
//! Declares the map layout view (basemaps, extents, zoom limits, styling),
//! composes the per-request layer set from static configuration plus one
//! spatial dataset service lookup, and serves the demo plot for clicked
//! features. Rendering and protocol handling are left to the map client and
//! the external map servers.
//!
//! # Example
//!
//! ```ignore
//! use map_layout::{AppWorkspace, LayerComposer, RequestContext};
//!
//! let composer = LayerComposer::new(settings, Default::default());
//! let mut request = RequestContext::new("/layout-showcase/map-layout");
//! let composition = composer.compose(&mut request, &AppWorkspace::new(path)).await?;
//! ```

pub mod app;
pub mod composer;
pub mod config;
pub mod plot;
pub mod request;
pub mod settings;
pub mod view;
pub mod workspace;

pub use app::{AppMetadata, SettingDeclaration, SettingKind, UrlMap};
pub use composer::{Composition, LayerComposer};
pub use config::ComposerConfig;
pub use plot::plot_for_layer_feature;
pub use request::{MessageLevel, RequestContext, UserMessage};
pub use settings::{SettingsProvider, SettingsStore, SpatialDatasetService, StaticSettings};
pub use view::{GeocodeKey, MapLayoutView};
pub use workspace::AppWorkspace;

/// Name of the spatial dataset service setting holding the GeoServer.
pub const PRIMARY_GEOSERVER_SETTING: &str = "primary_geoserver";

/// Name of the custom setting holding the geocoding API key.
pub const GEOCODE_API_KEY_SETTING: &str = "geocode_api_key";
