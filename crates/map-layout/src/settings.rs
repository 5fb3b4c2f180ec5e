//! App settings lookup.
//!
//! The composer and the view read settings through [`SettingsProvider`], so
//! the backing store can be swapped (YAML file, database, test double).

use async_trait::async_trait;
use layout_common::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::app::{SettingDeclaration, SettingKind};

/// Read-only access to the app's settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Value of a string setting; `None` when declared but left empty.
    async fn custom_setting(&self, name: &str) -> LayoutResult<Option<String>>;

    /// Endpoint of the service assigned to a spatial dataset service setting.
    ///
    /// Fails with [`LayoutError::SettingNotAssigned`] when no service is assigned.
    async fn spatial_dataset_service(
        &self,
        name: &str,
        as_public_endpoint: bool,
        as_wms: bool,
    ) -> LayoutResult<String>;
}

/// A registered spatial dataset service (e.g. a GeoServer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialDatasetService {
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Internal endpoint, usually the GeoServer REST root
    pub endpoint: String,
    /// Endpoint reachable by browsers, if different
    #[serde(default)]
    pub public_endpoint: Option<String>,
}

fn default_engine() -> String {
    "geoserver".to_string()
}

impl SpatialDatasetService {
    /// Pick the internal or public endpoint and optionally convert it to WMS.
    pub fn resolve_endpoint(&self, as_public_endpoint: bool, as_wms: bool) -> String {
        let base = if as_public_endpoint {
            self.public_endpoint.as_deref().unwrap_or(&self.endpoint)
        } else {
            &self.endpoint
        };
        if as_wms {
            wms_endpoint(base)
        } else {
            base.to_string()
        }
    }
}

/// Convert a GeoServer REST endpoint (`.../geoserver/rest/`) into its WMS endpoint.
pub fn wms_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    let root = trimmed.strip_suffix("/rest").unwrap_or(trimmed);
    if root.ends_with("/wms") {
        root.to_string()
    } else {
        format!("{}/wms", root)
    }
}

/// Persisted setting values as loaded from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsStore {
    /// String settings by name
    #[serde(default)]
    pub custom_settings: HashMap<String, String>,
    /// Registered services by service name
    #[serde(default)]
    pub spatial_dataset_services: HashMap<String, SpatialDatasetService>,
    /// Setting name -> service name
    #[serde(default)]
    pub setting_assignments: HashMap<String, String>,
}

/// In-memory [`SettingsProvider`] over declared settings and a store.
#[derive(Debug, Clone)]
pub struct StaticSettings {
    declared: Vec<SettingDeclaration>,
    store: SettingsStore,
}

impl StaticSettings {
    /// Build a provider, rejecting assignments that cannot be honoured.
    pub fn new(declared: Vec<SettingDeclaration>, store: SettingsStore) -> LayoutResult<Self> {
        for (setting, service_name) in &store.setting_assignments {
            let declaration = declared
                .iter()
                .find(|d| &d.name == setting)
                .ok_or_else(|| LayoutError::UnknownSetting(setting.clone()))?;

            let engine = match &declaration.kind {
                SettingKind::SpatialDatasetService { engine } => engine,
                SettingKind::String => {
                    return Err(LayoutError::InvalidConfig(format!(
                        "setting '{}' is not a spatial dataset service setting",
                        setting
                    )))
                }
            };

            let service = store
                .spatial_dataset_services
                .get(service_name)
                .ok_or_else(|| {
                    LayoutError::InvalidConfig(format!(
                        "setting '{}' is assigned to unknown service '{}'",
                        setting, service_name
                    ))
                })?;

            if &service.engine != engine {
                return Err(LayoutError::InvalidConfig(format!(
                    "setting '{}' expects a {} service but '{}' is {}",
                    setting, engine, service_name, service.engine
                )));
            }
        }

        Ok(Self { declared, store })
    }

    fn declaration(&self, name: &str) -> LayoutResult<&SettingDeclaration> {
        self.declared
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| LayoutError::UnknownSetting(name.to_string()))
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn custom_setting(&self, name: &str) -> LayoutResult<Option<String>> {
        let declaration = self.declaration(name)?;
        if declaration.is_spatial() {
            return Err(LayoutError::InvalidConfig(format!(
                "setting '{}' is not a string setting",
                name
            )));
        }
        Ok(self
            .store
            .custom_settings
            .get(name)
            .filter(|v| !v.trim().is_empty())
            .cloned())
    }

    async fn spatial_dataset_service(
        &self,
        name: &str,
        as_public_endpoint: bool,
        as_wms: bool,
    ) -> LayoutResult<String> {
        let declaration = self.declaration(name)?;
        if !declaration.is_spatial() {
            return Err(LayoutError::InvalidConfig(format!(
                "setting '{}' is not a spatial dataset service setting",
                name
            )));
        }

        let service_name = self
            .store
            .setting_assignments
            .get(name)
            .ok_or_else(|| LayoutError::SettingNotAssigned(name.to_string()))?;

        let service = self
            .store
            .spatial_dataset_services
            .get(service_name)
            .ok_or_else(|| {
                LayoutError::InvalidConfig(format!("unknown service '{}'", service_name))
            })?;

        let endpoint = service.resolve_endpoint(as_public_endpoint, as_wms);
        debug!(setting = name, service = %service_name, endpoint = %endpoint, "Resolved spatial dataset service");
        Ok(endpoint)
    }
}
