//! docbase - In-memory knowledge base over MCP streamable HTTP
//!
//! A small MCP server exposing a fixed document set through JSON-RPC
//! over Server-Sent Events, for chat clients' deep-research
//! tool-calling feature.
//!
//! # Layout
//!
//! Three layers:
//!
//! - **core**: protocol-agnostic domain logic; config, errors, the
//!   immutable document store, substring search and fetch, and the
//!   service container shared by the adapters
//! - **mcp**: JSON-RPC method dispatch and the two tool handlers;
//!   knows nothing about the transport
//! - **http**: the Axum surface; descriptor and health endpoints,
//!   the MCP-over-SSE endpoint, OAuth stubs, request logging
//!
//! # Key properties
//!
//! - Single-shot dispatch: each request yields at most one SSE frame
//! - Read-only document store, safe for concurrent access
//! - Well-formed JSON-RPC envelope on every path except a raw body
//!   parse failure, which gets a plain HTTP 400

pub mod core;
pub mod http;
pub mod mcp;

// Convenience re-exports
pub use crate::core::config::Config;
pub use crate::core::documents::DocumentStore;
pub use crate::core::error::{DocbaseError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
