//! Error types for the docbase service.
//!
//! One domain error enum serves the whole crate. The plain HTTP
//! surfaces convert it to a status code here; the mcp module applies
//! its own JSON-RPC error-code mapping instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for docbase operations
pub type Result<T> = std::result::Result<T, DocbaseError>;

/// Main error type for the docbase service
#[derive(Error, Debug)]
pub enum DocbaseError {
    #[error("Document with ID '{0}' not found")]
    DocumentNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocbaseError {
    /// HTTP status for this error on the plain endpoints
    pub fn status_code(&self) -> StatusCode {
        match self {
            DocbaseError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
            DocbaseError::InvalidArgument(_) | DocbaseError::ConfigError(_) => {
                StatusCode::BAD_REQUEST
            }
            DocbaseError::IoError(_) | DocbaseError::SerdeError(_) | DocbaseError::TomlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for absent-lookup failures
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocbaseError::DocumentNotFound(_))
    }

    /// True for caller-input failures
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocbaseError::InvalidArgument(_) | DocbaseError::ConfigError(_)
        )
    }
}

impl IntoResponse for DocbaseError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
