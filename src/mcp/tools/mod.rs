//! MCP tool implementations
//!
//! The two tools exposed to deep-research clients: substring search
//! over the knowledge base, and full-document fetch by id.

pub mod fetch;
pub mod handler;
pub mod registry;
pub mod search;

pub use fetch::FetchToolHandler;
pub use handler::McpToolHandler;
pub use registry::ToolRegistry;
pub use search::SearchToolHandler;
