//! Settings lookups and geocode key memoisation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use layout_common::{LayoutError, LayoutResult};
use map_layout::{
    AppMetadata, GeocodeKey, SettingsProvider, SettingsStore, SpatialDatasetService,
    StaticSettings,
};

fn settings_with(store: SettingsStore) -> StaticSettings {
    StaticSettings::new(AppMetadata::layout_showcase().settings(), store).unwrap()
}

// ============================================================================
// StaticSettings
// ============================================================================

#[tokio::test]
async fn test_unassigned_spatial_setting() {
    let settings = settings_with(SettingsStore::default());
    let err = settings
        .spatial_dataset_service("primary_geoserver", true, true)
        .await
        .unwrap_err();
    assert!(err.is_not_assigned());
}

#[tokio::test]
async fn test_assigned_spatial_setting_as_wms() {
    let mut store = SettingsStore::default();
    store.spatial_dataset_services.insert(
        "main".to_string(),
        SpatialDatasetService {
            engine: "geoserver".to_string(),
            endpoint: "http://geoserver:8080/geoserver/rest/".to_string(),
            public_endpoint: None,
        },
    );
    store
        .setting_assignments
        .insert("primary_geoserver".to_string(), "main".to_string());
    let settings = settings_with(store);

    let wms = settings
        .spatial_dataset_service("primary_geoserver", true, true)
        .await
        .unwrap();
    assert_eq!(wms, "http://geoserver:8080/geoserver/wms");

    let rest = settings
        .spatial_dataset_service("primary_geoserver", false, false)
        .await
        .unwrap();
    assert_eq!(rest, "http://geoserver:8080/geoserver/rest/");
}

#[tokio::test]
async fn test_undeclared_setting_is_unknown() {
    let settings = settings_with(SettingsStore::default());
    let err = settings.custom_setting("mapbox_token").await.unwrap_err();
    assert!(matches!(err, LayoutError::UnknownSetting(_)));
}

#[tokio::test]
async fn test_kind_mismatch_rejected() {
    let settings = settings_with(SettingsStore::default());
    assert!(settings.custom_setting("primary_geoserver").await.is_err());
    assert!(settings
        .spatial_dataset_service("geocode_api_key", true, true)
        .await
        .is_err());
}

#[tokio::test]
async fn test_blank_custom_setting_is_none() {
    let mut store = SettingsStore::default();
    store
        .custom_settings
        .insert("geocode_api_key".to_string(), "   ".to_string());
    let settings = settings_with(store);
    assert_eq!(settings.custom_setting("geocode_api_key").await.unwrap(), None);
}

// ============================================================================
// GeocodeKey
// ============================================================================

/// Counts lookups and returns a fixed key.
struct CountingSettings {
    lookups: AtomicUsize,
    key: Option<String>,
}

#[async_trait]
impl SettingsProvider for CountingSettings {
    async fn custom_setting(&self, _name: &str) -> LayoutResult<Option<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.key.clone())
    }

    async fn spatial_dataset_service(
        &self,
        name: &str,
        _as_public_endpoint: bool,
        _as_wms: bool,
    ) -> LayoutResult<String> {
        Err(LayoutError::SettingNotAssigned(name.to_string()))
    }
}

#[tokio::test]
async fn test_geocode_key_memoised_once_found() {
    let settings = Arc::new(CountingSettings {
        lookups: AtomicUsize::new(0),
        key: Some("abc123".to_string()),
    });
    let key = GeocodeKey::new();

    assert_eq!(key.get(&*settings).await.as_deref(), Some("abc123"));
    assert_eq!(key.get(&*settings).await.as_deref(), Some("abc123"));
    assert_eq!(settings.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_geocode_key_unset_is_looked_up_again() {
    let settings = CountingSettings {
        lookups: AtomicUsize::new(0),
        key: None,
    };
    let key = GeocodeKey::new();

    assert_eq!(key.get(&settings).await, None);
    assert_eq!(key.get(&settings).await, None);
    assert_eq!(settings.lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_geocode_key_undeclared_yields_none() {
    let settings = StaticSettings::new(Vec::new(), SettingsStore::default()).unwrap();
    assert_eq!(GeocodeKey::new().get(&settings).await, None);
}
