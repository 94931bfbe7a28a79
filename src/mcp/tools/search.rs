//! Search tool handler

use super::handler::McpToolHandler;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::ToolSchema;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: String,
}

pub struct SearchToolHandler {
    services: Arc<Services>,
}

impl SearchToolHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchToolHandler {
    fn name(&self) -> &str {
        "search"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Searches for resources using the provided query string \
                          and returns matching results."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query."
                    }
                },
                "required": ["query"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "results": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {"type": "string", "description": "ID of the resource."},
                                "title": {"type": "string", "description": "Title or headline of the resource."},
                                "text": {"type": "string", "description": "Text snippet or summary from the resource."},
                                "url": {"type": ["string", "null"], "description": "URL of the resource. Optional but needed for citations to work."}
                            },
                            "required": ["id", "title", "text"]
                        }
                    }
                },
                "required": ["results"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<Value, McpError> {
        let args: SearchArgs = serde_json::from_value(args)?;

        let response = self.services.search.search(&args.query);
        info!(
            "Search for '{}' found {} results",
            args.query,
            response.results.len()
        );

        Ok(serde_json::to_value(response)?)
    }
}
