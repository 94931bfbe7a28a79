//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use docbase::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "1.0.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method.as_deref(), Some("initialize"));
        assert_eq!(req.jsonrpc, "2.0");
        assert!(req.id.is_some());
        assert!(req.params.is_some());
    }

    #[test]
    fn test_parse_request_without_method() {
        // Syntactically valid envelope, no method: parses, routed to
        // a method-not-found error rather than a parse failure.
        let req: JsonRpcRequest = serde_json::from_str(r#"{"jsonrpc":"2.0","id":7}"#).unwrap();
        assert!(req.method.is_none());
        assert_eq!(req.id, Some(json!(7)));
    }

    #[test]
    fn test_parse_notification_without_id() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert_eq!(req.method.as_deref(), Some("notifications/initialized"));
        assert!(req.id.is_none());
    }

    #[test]
    fn test_serialize_initialize_result() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability::default(),
            },
            server_info: ServerInfo {
                name: "Local Knowledge Base".to_string(),
                version: "0.1.0".to_string(),
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["protocolVersion"], "2025-03-26");
        assert_eq!(json["serverInfo"]["name"], "Local Knowledge Base");
        // Empty capability marker for tools
        assert_eq!(json["capabilities"]["tools"], json!({}));
    }

    #[test]
    fn test_response_with_result_omits_error() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            result: Some(json!({"status": "ok"})),
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_response_with_error_omits_result() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            result: None,
            error: Some(JsonRpcError {
                code: INTERNAL_ERROR,
                message: "Internal error".to_string(),
                data: None,
            }),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"code\":-32603"));
        assert!(!json.contains("\"result\""));
    }

    #[test]
    fn test_response_serializes_null_id() {
        let response = JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: None,
            result: None,
            error: Some(JsonRpcError {
                code: METHOD_NOT_FOUND,
                message: "Method not found".to_string(),
                data: None,
            }),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"id\":null"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PARSE_ERROR, -32700);
        assert_eq!(INVALID_REQUEST, -32600);
        assert_eq!(METHOD_NOT_FOUND, -32601);
        assert_eq!(INVALID_PARAMS, -32602);
        assert_eq!(INTERNAL_ERROR, -32603);
    }

    #[test]
    fn test_tool_schema_uses_snake_case_keys() {
        let schema = ToolSchema {
            name: "search".to_string(),
            description: "Searches.".to_string(),
            input_schema: json!({"type": "object"}),
            output_schema: json!({"type": "object"}),
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("input_schema").is_some());
        assert!(json.get("output_schema").is_some());
        assert!(json.get("inputSchema").is_none());
    }

    #[test]
    fn test_tool_call_params_arguments_optional() {
        let params: ToolCallParams =
            serde_json::from_value(json!({"name": "search"})).unwrap();
        assert_eq!(params.name.as_deref(), Some("search"));
        assert!(params.arguments.is_none());
    }
}
