//! Tool handler trait

use crate::mcp::error::McpError;
use crate::mcp::protocol::ToolSchema;
use async_trait::async_trait;
use serde_json::Value;

/// Interface implemented by each MCP tool
///
/// `execute` returns the raw value matching the tool's output_schema;
/// the dispatcher places it in the JSON-RPC envelope unchanged rather
/// than wrapping it in content blocks.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name as exposed in tools/list and tools/call
    fn name(&self) -> &str;

    /// Static descriptor for tools/list
    fn schema(&self) -> ToolSchema;

    /// Run the tool against already-validated object arguments
    async fn execute(&self, args: Value) -> Result<Value, McpError>;
}
