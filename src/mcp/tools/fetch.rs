//! Fetch tool handler

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
struct FetchArgs {
    #[serde(default)]
    id: String,
}

pub struct FetchToolHandler {
    services: Arc<Services>,
}

impl FetchToolHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for FetchToolHandler {
    fn name(&self) -> &str {
        "fetch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "fetch".to_string(),
            description: "Retrieves detailed content for a specific resource \
                          identified by the given ID."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "ID of the resource to fetch."
                    }
                },
                "required": ["id"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "ID of the resource."},
                    "title": {"type": "string", "description": "Title or headline of the fetched resource."},
                    "text": {"type": "string", "description": "Complete textual content of the resource."},
                    "url": {"type": ["string", "null"], "description": "URL of the resource. Optional but needed for citations to work."},
                    "metadata": {
                        "type": ["object", "null"],
                        "additionalProperties": {"type": "string"},
                        "description": "Optional metadata providing additional context."
                    }
                },
                "required": ["id", "title", "text"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<Value, McpError> {
        let args: FetchArgs = serde_json::from_value(args)?;

        let document = self.services.search.fetch(&args.id)?;
        info!("Fetched document '{}': {}", args.id, document.title);

        Ok(serde_json::to_value(document)?)
    }
}
