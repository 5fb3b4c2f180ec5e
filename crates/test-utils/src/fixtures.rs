//! Common test fixtures for layout showcase tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Relative location of the states file inside an app workspace.
pub const STATES_RELATIVE_PATH: &str = "map_layout/us-states.json";

/// Layer extents as configured by the showcase.
pub mod extents {
    /// Configured GeoJSON layer extent (corners intentionally not ordered)
    pub const GEOJSON_LAYER: [f64; 4] = [-63.69, 12.81, -129.17, 49.38];

    /// Configured ArcGIS layer extent
    pub const ARCGIS_LAYER: [f64; 4] = [-173.0, 17.0, -65.0, 72.0];
}

/// Two coarse state outlines.
pub const SAMPLE_STATES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "08",
      "properties": {"name": "Colorado", "density": 49.33},
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-109.05, 41.0], [-102.05, 41.0], [-102.05, 37.0], [-109.05, 37.0], [-109.05, 41.0]]]
      }
    },
    {
      "type": "Feature",
      "id": "56",
      "properties": {"name": "Wyoming", "density": 5.851},
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-111.05, 45.0], [-104.05, 45.0], [-104.05, 41.0], [-111.05, 41.0], [-111.05, 45.0]]]
      }
    }
  ]
}"#;

/// A feature collection far outside the configured layer extent.
pub const FAR_AWAY_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"name": "Null Island"},
      "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
    }
  ]
}"#;

/// Truncated JSON.
pub const MALFORMED_GEOJSON: &str = r#"{"type": "FeatureCollection", "features": ["#;

/// Valid JSON that is not GeoJSON.
pub const NOT_GEOJSON: &str = r#"{"states": ["Colorado", "Wyoming"]}"#;

/// Write `contents` to the states file under `root`, creating directories.
pub fn write_states_file(root: &Path, contents: &str) {
    let path = root.join(STATES_RELATIVE_PATH);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create map_layout directory");
    }
    fs::write(&path, contents).expect("Failed to write states file");
}

/// A temporary app workspace whose states file holds `contents`.
pub fn temp_workspace_with(contents: &str) -> TempDir {
    let dir = crate::temp_test_dir_with_prefix("app_workspace_");
    write_states_file(dir.path(), contents);
    dir
}

/// A temporary app workspace seeded with [`SAMPLE_STATES_GEOJSON`].
pub fn temp_workspace_with_states() -> TempDir {
    temp_workspace_with(SAMPLE_STATES_GEOJSON)
}

/// A temporary app workspace with no states file.
pub fn empty_temp_workspace() -> TempDir {
    crate::temp_test_dir_with_prefix("app_workspace_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_workspace_has_states_file() {
        let dir = temp_workspace_with_states();
        let contents = fs::read_to_string(dir.path().join(STATES_RELATIVE_PATH)).unwrap();
        assert!(contents.contains("Colorado"));
    }

    #[test]
    fn test_empty_workspace_has_no_states_file() {
        let dir = empty_temp_workspace();
        assert!(!dir.path().join(STATES_RELATIVE_PATH).exists());
    }
}
