//! Core data types for the docbase service.
//!
//! This module defines all data structures used throughout the
//! application, including documents, search results, and the
//! payloads for the plain HTTP endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single knowledge-base document
///
/// Documents are created once at startup and never mutated. The
/// serialized form is exactly the payload returned by the `fetch`
/// tool: id, title, full text, optional url, optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier (primary key)
    pub id: String,

    /// Title or headline
    pub title: String,

    /// Complete textual content
    pub text: String,

    /// Source URL, if any (needed for client-side citations)
    pub url: Option<String>,

    /// Optional string-to-string metadata
    ///
    /// BTreeMap keeps serialized key order deterministic.
    pub metadata: Option<BTreeMap<String, String>>,
}

/// A single search hit
///
/// The `text` field is a snippet: at most 200 characters of the
/// source text, with a trailing ellipsis when truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document identifier
    pub id: String,

    /// Document title
    pub title: String,

    /// Truncated text snippet
    pub text: String,

    /// Source URL, if any
    pub url: Option<String>,
}

/// Response payload for the `search` tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching documents in store order
    pub results: Vec<SearchResult>,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving
    pub status: String,

    /// Configured server display name
    pub server: String,

    /// Unix timestamp (seconds)
    pub timestamp: i64,

    /// Number of registered MCP tools
    pub tools_available: usize,

    /// Number of documents in the store
    pub documents: usize,
}

/// Response for GET / (server descriptor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDescriptor {
    /// Configured server display name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Crate version
    pub version: String,

    /// Protocol identifier
    pub protocol: String,

    /// Transport identifier
    pub transport: String,

    /// Names of the registered MCP tools
    pub tools: Vec<String>,

    /// Number of documents in the store
    pub documents: usize,

    /// Path of the MCP endpoint
    pub mcp_endpoint: String,
}
