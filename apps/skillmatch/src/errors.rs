use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Every pipeline stage returns `Result<T, AppError>`; the CLI renders it with `to_json`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The input could not be parsed as a PDF document.
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for callers that branch on the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::RoleNotFound(_) => "ROLE_NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Renders the `{"error": {"code", "message"}}` envelope.
    pub fn to_json(&self) -> Value {
        let message = match self {
            AppError::Extraction(msg) => msg.clone(),
            AppError::RoleNotFound(role) => format!("Unknown job role '{role}'"),
            AppError::Config(msg) => msg.clone(),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                e.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}
