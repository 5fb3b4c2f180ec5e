//! Basemap choices offered by the map view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for a provider that serves several basemap flavours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasemapOptions {
    pub layer: String,
    pub control_label: String,
}

/// A basemap entry: either a bare provider name or `{provider: options}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Basemap {
    Named(String),
    Configured(BTreeMap<String, BasemapOptions>),
}

impl Basemap {
    pub fn named(provider: impl Into<String>) -> Self {
        Basemap::Named(provider.into())
    }

    pub fn configured(
        provider: impl Into<String>,
        layer: impl Into<String>,
        control_label: impl Into<String>,
    ) -> Self {
        let mut entry = BTreeMap::new();
        entry.insert(
            provider.into(),
            BasemapOptions {
                layer: layer.into(),
                control_label: control_label.into(),
            },
        );
        Basemap::Configured(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_serializes_as_string() {
        let json = serde_json::to_value(Basemap::named("OpenStreetMap")).unwrap();
        assert_eq!(json, serde_json::json!("OpenStreetMap"));
    }

    #[test]
    fn test_configured_shape() {
        let basemap = Basemap::configured("Stamen", "toner", "Black and White");
        let json = serde_json::to_value(&basemap).unwrap();
        assert_eq!(json["Stamen"]["layer"], "toner");
        assert_eq!(json["Stamen"]["control_label"], "Black and White");
    }

    #[test]
    fn test_deserialize_mixed_list() {
        let json = r#"["ESRI", {"Stamen": {"layer": "toner", "control_label": "Black and White"}}]"#;
        let basemaps: Vec<Basemap> = serde_json::from_str(json).unwrap();
        assert_eq!(basemaps[0], Basemap::named("ESRI"));
        assert_eq!(
            basemaps[1],
            Basemap::configured("Stamen", "toner", "Black and White")
        );
    }
}
