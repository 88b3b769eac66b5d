//! Error types for yt-cloud

use thiserror::Error;

/// Faults raised by the remote snapshot catalog and stack service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// The named stack does not exist (C001)
    #[error("[C001] Stack {0} does not exist")]
    StackNotFound(String),

    /// The service rejected or failed the request (C002)
    #[error("[C002] {operation} failed ({code}): {message}")]
    Service {
        operation: &'static str,
        code: String,
        message: String,
    },
}

impl CloudError {
    /// Build a service fault
    pub fn service(
        operation: &'static str,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CloudError::Service {
            operation,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the fault means the stack is genuinely absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, CloudError::StackNotFound(_))
    }
}

/// Result type alias for CloudError
pub type CloudResult<T> = Result<T, CloudError>;
