//! Error types for map layout composition.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LayoutError.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Primary error type for layout operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    // === Settings Errors ===
    #[error("App setting not assigned: {0}")]
    SettingNotAssigned(String),

    #[error("Unknown app setting: {0}")]
    UnknownSetting(String),

    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("No URL map named '{0}'")]
    RouteNotFound(String),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Resource Errors ===
    #[error("Failed to read {path:?}: {source}")]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {message}")]
    ResourceParse { path: PathBuf, message: String },

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl LayoutError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            LayoutError::MissingParameter(_) => 400,
            LayoutError::RouteNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Short title used in problem-detail responses.
    pub fn title(&self) -> &'static str {
        match self {
            LayoutError::SettingNotAssigned(_) | LayoutError::UnknownSetting(_) => {
                "Setting Error"
            }
            LayoutError::MissingParameter(_) => "Bad Request",
            LayoutError::RouteNotFound(_) => "Not Found",
            LayoutError::InvalidConfig(_) => "Configuration Error",
            LayoutError::ResourceRead { .. } | LayoutError::ResourceParse { .. } => {
                "Resource Error"
            }
            LayoutError::Internal(_) => "Internal Server Error",
        }
    }

    /// True for the one error the composer recovers from.
    pub fn is_not_assigned(&self) -> bool {
        matches!(self, LayoutError::SettingNotAssigned(_))
    }
}
