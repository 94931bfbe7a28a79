//! Tool registry

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup table for the registered MCP tools
///
/// Keeps handlers in registration order (so tools/list output is
/// deterministic) with a name index for O(1) dispatch.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn McpToolHandler>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a tool handler under its own name
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        self.index
            .insert(handler.name().to_string(), self.handlers.len());
        self.handlers.push(handler);
    }

    /// Look up a handler by tool name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.index.get(name).map(|&pos| &self.handlers[pos])
    }

    /// Schemas of all registered tools, in registration order
    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers.iter().map(|h| h.schema()).collect()
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<String> {
        self.handlers.iter().map(|h| h.name().to_string()).collect()
    }

    /// Whether a tool with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
