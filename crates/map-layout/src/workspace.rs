//! Application workspace: the directory holding bundled resources.

use geojson::GeoJson;
use layout_common::{LayoutError, LayoutResult};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the app workspace directory.
#[derive(Debug, Clone)]
pub struct AppWorkspace {
    path: PathBuf,
}

impl AppWorkspace {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of a workspace-relative resource.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    pub fn has_file(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).is_file()
    }

    /// Read and parse a GeoJSON resource. The file is closed before returning.
    pub fn read_geojson(&self, relative: impl AsRef<Path>) -> LayoutResult<GeoJson> {
        let path = self.join(relative);
        let file = File::open(&path).map_err(|source| LayoutError::ResourceRead {
            path: path.clone(),
            source,
        })?;

        let geojson =
            GeoJson::from_reader(BufReader::new(file)).map_err(|e| LayoutError::ResourceParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path.display(), "Loaded GeoJSON resource");
        Ok(geojson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        empty_temp_workspace, temp_workspace_with, MALFORMED_GEOJSON, NOT_GEOJSON,
        STATES_RELATIVE_PATH,
    };

    #[test]
    fn test_reads_feature_collection() {
        let dir = test_utils::temp_workspace_with_states();
        let workspace = AppWorkspace::new(dir.path());
        assert!(workspace.has_file(STATES_RELATIVE_PATH));

        match workspace.read_geojson(STATES_RELATIVE_PATH).unwrap() {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 2),
            other => panic!("expected a feature collection, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = empty_temp_workspace();
        let workspace = AppWorkspace::new(dir.path());
        let err = workspace.read_geojson(STATES_RELATIVE_PATH).unwrap_err();
        assert!(matches!(err, LayoutError::ResourceRead { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = temp_workspace_with(MALFORMED_GEOJSON);
        let workspace = AppWorkspace::new(dir.path());
        let err = workspace.read_geojson(STATES_RELATIVE_PATH).unwrap_err();
        assert!(matches!(err, LayoutError::ResourceParse { .. }));
    }

    #[test]
    fn test_json_that_is_not_geojson_is_parse_error() {
        let dir = temp_workspace_with(NOT_GEOJSON);
        let workspace = AppWorkspace::new(dir.path());
        assert!(workspace.read_geojson(STATES_RELATIVE_PATH).is_err());
    }
}
