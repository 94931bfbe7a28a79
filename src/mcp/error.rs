//! MCP-specific error types

use crate::mcp::protocol::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and wire message for this error
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

/// Domain failures all surface as internal errors on the wire
///
/// The dispatch contract does not distinguish handler-level error
/// kinds: a fetch of an unknown document and a genuine fault both
/// produce code -32603 with the failure's message.
impl From<crate::core::error::DocbaseError> for McpError {
    fn from(err: crate::core::error::DocbaseError) -> Self {
        McpError::InternalError(err.to_string())
    }
}
