//! MCP protocol method handlers
//!
//! Single-shot dispatch: each request produces at most one response
//! envelope (none for notifications). There is no session loop; the
//! transport closes its stream after the one emitted frame.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{FetchToolHandler, SearchToolHandler, ToolRegistry};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    server_name: String,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(SearchToolHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(FetchToolHandler::new(Arc::clone(&services))));

        Self {
            initialized: AtomicBool::new(false),
            server_name: services.config.server.name.clone(),
            tool_registry: registry,
        }
    }

    /// Names of the registered tools, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.names()
    }

    /// Number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tool_registry.len()
    }

    /// Route a parsed request to its method handler
    ///
    /// Returns `None` for notifications, which produce zero frames.
    /// Handler-level failures never propagate: they are converted to
    /// error envelopes here.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        let method = request.method.clone().unwrap_or_default();

        let outcome = match method.as_str() {
            "initialize" => self.handle_initialize(request).await.map(Some),
            "notifications/initialized" => self.handle_initialized(request).await.map(|()| None),
            "tools/list" => self.handle_tools_list(request).await.map(Some),
            "tools/call" => self.handle_tools_call(request).await.map(Some),
            _ => {
                warn!("Unknown method: {}", method);
                Ok(Some(error_response(
                    id.clone(),
                    METHOD_NOT_FOUND,
                    format!("Method not found: {method}"),
                )))
            }
        };

        match outcome {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing '{}': {}", method, e);
                let (code, message) = e.code_and_message();
                Some(error_response(id, code, message))
            }
        }
    }

    /// initialize: fixed result apart from the configured display name
    ///
    /// Input params are ignored.
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        info!("Client initialized");

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(result_response(request.id, serde_json::to_value(result)?))
    }

    /// notifications/initialized: one-way, no acknowledgement
    ///
    /// An id on the envelope, if any, is ignored.
    pub async fn handle_initialized(&self, _request: JsonRpcRequest) -> Result<(), McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");
        Ok(())
    }

    /// tools/list: the static tool descriptors, verbatim
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(result_response(request.id, json!({ "tools": tools })))
    }

    /// tools/call: validate, delegate, wrap
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: ToolCallParams = match request.params {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| McpError::InvalidParams(format!("Invalid params: {e}")))?,
            None => ToolCallParams::default(),
        };

        // arguments must be a structured object, never a scalar
        let arguments = match params.arguments {
            None => Value::Object(Default::default()),
            Some(value) if value.is_object() => value,
            Some(value) => {
                return Ok(error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!(
                        "Invalid params: arguments must be an object, not {}",
                        json_type_name(&value)
                    ),
                ));
            }
        };

        let name = params.name.unwrap_or_default();
        let handler = match self.tool_registry.get(&name) {
            Some(h) => h,
            None => {
                warn!("Unknown tool requested: {}", name);
                return Ok(error_response(
                    request.id,
                    METHOD_NOT_FOUND,
                    format!("Method not found: {name}"),
                ));
            }
        };

        match handler.execute(arguments).await {
            Ok(result) => Ok(result_response(request.id, result)),
            Err(e) => {
                error!("Tool '{}' failed: {}", name, e);
                let (code, message) = e.code_and_message();
                Ok(error_response(request.id, code, message))
            }
        }
    }
}

fn result_response(id: Option<Value>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        result: Some(result),
        error: None,
    }
}

fn error_response(id: Option<Value>, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message,
            data: None,
        }),
    }
}

/// JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
