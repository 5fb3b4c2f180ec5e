//! Path utilities for locating bundled workspaces.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the test-utils manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the bundled app workspace of a service.
///
/// # Arguments
///
/// * `service_name` - The name of the service (e.g., "layout-showcase")
///
/// # Returns
///
/// The path to `services/{service_name}/workspaces/app_workspace/`
pub fn service_app_workspace(service_name: &str) -> PathBuf {
    workspace_root()
        .join("services")
        .join(service_name)
        .join("workspaces")
        .join("app_workspace")
}

/// Creates a temporary directory with a specific prefix.
pub fn temp_test_dir_with_prefix(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary test directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_service_app_workspace() {
        let dir = service_app_workspace("layout-showcase");
        assert!(dir.to_string_lossy().contains("layout-showcase"));
        assert!(dir.ends_with("workspaces/app_workspace"));
    }

    #[test]
    fn test_temp_test_dir_with_prefix() {
        let dir = temp_test_dir_with_prefix("layout_test_");
        let path_str = dir.path().to_string_lossy();
        assert!(path_str.contains("layout_test_"));
    }
}
