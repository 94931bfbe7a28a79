//! MCP (Model Context Protocol) adapter
//!
//! This module implements JSON-RPC 2.0 method dispatch for the MCP
//! streamable HTTP transport, exposing the knowledge base as the
//! `search` and `fetch` tools used by deep-research clients. It is
//! transport-free: the http module wraps `dispatch` output in SSE
//! frames.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod tools;

// Re-export main types
pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use tools::{McpToolHandler, ToolRegistry};
