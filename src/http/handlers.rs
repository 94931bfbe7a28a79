//! HTTP request handlers for the plain endpoints
//!
//! Implements the server descriptor and health check. The MCP
//! endpoint lives in the sibling mcp module.

use axum::{extract::State, Json};

use crate::core::types::{HealthResponse, ServerDescriptor};
use crate::http::state::AppState;

/// Root endpoint handler
///
/// Returns a static descriptor of the server: name, tool list,
/// document count, and where the MCP endpoint is mounted.
pub async fn root_handler(State(state): State<AppState>) -> Json<ServerDescriptor> {
    Json(ServerDescriptor {
        name: state.services.config.server.name.clone(),
        description: "MCP server for deep-research clients".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: "MCP-SSE".to_string(),
        transport: "server-sent-events".to_string(),
        tools: state.mcp.tool_names(),
        documents: state.services.store.len(),
        mcp_endpoint: "/mcp".to_string(),
    })
}

/// Health check handler
///
/// Returns liveness status with a current timestamp.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        server: state.services.config.server.name.clone(),
        timestamp: chrono::Utc::now().timestamp(),
        tools_available: state.mcp.tool_count(),
        documents: state.services.store.len(),
    })
}
