//! JSON-RPC 2.0 protocol types for the MCP adapter

use serde::{Deserialize, Serialize};
use serde_json::Value;

// JSON-RPC 2.0 error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Protocol revision advertised by initialize
pub const PROTOCOL_VERSION: &str = "2025-03-26";

/// JSON-RPC version tag on every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Inbound JSON-RPC request or notification
///
/// `method` is optional so that a syntactically valid envelope with a
/// missing method still parses and is answered with a method-not-found
/// error instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,

    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub params: Option<Value>,
}

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// Outbound JSON-RPC response
///
/// Exactly one of `result`/`error` is populated. The `id` field is
/// always serialized (as null for requests that carried none), which
/// is what deep-research clients expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,

    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Result payload for the initialize method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

/// Advertised server capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Tools capability marker (serializes as an empty object)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsCapability {}

/// Server identity for initialize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Static tool descriptor returned by tools/list
///
/// Wire keys are snake_case (`input_schema`, `output_schema`) to
/// match the deep-research tool contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
}

/// Parameters of a tools/call request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub arguments: Option<Value>,
}
