//! Error types for yt-core

use thiserror::Error;

/// Core error type for yesterdaytabase
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: No inline configuration and no readable persisted default
    #[error("[E001] No inline config supplied and default config not readable at {path}: {reason}")]
    ConfigNotFound { path: String, reason: String },

    /// E002: Failed to parse configuration document
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Required configuration fields missing or empty
    #[error("[E003] Invalid config: missing required fields: {}", missing.join(", "))]
    ConfigInvalid { missing: Vec<String> },

    /// E004: Template document could not be read
    #[error("[E004] Couldn't read CloudFormation template '{path}': {source}")]
    TemplateUnreadable {
        path: String,
        source: std::io::Error,
    },
}

impl CoreError {
    /// Whether this error belongs to the configuration family (E001-E003)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CoreError::ConfigNotFound { .. }
                | CoreError::ConfigParseError { .. }
                | CoreError::ConfigInvalid { .. }
        )
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
