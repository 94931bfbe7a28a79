//! MCP dispatch tests
//!
//! Exercises the method routing state machine end to end against the
//! built-in sample documents.

#[cfg(test)]
mod tests {
    use crate::common::{create_test_handlers, rpc_request, tiny_document_set, SAMPLE_DOC_IDS};
    use docbase::core::config::Config;
    use docbase::core::services::Services;
    use docbase::mcp::protocol::{
        JsonRpcRequest, INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PROTOCOL_VERSION,
    };
    use docbase::mcp::ProtocolHandlers;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_initialize_returns_fixed_result() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request("initialize", Some(json!(1)), Some(json!({}))))
            .await
            .expect("initialize is a request, not a notification");

        assert_eq!(response.id, Some(json!(1)));
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["capabilities"]["tools"], json!({}));
        assert_eq!(result["serverInfo"]["name"], "Local Knowledge Base");
        assert!(result["serverInfo"]["version"].is_string());
    }

    #[tokio::test]
    async fn test_initialize_ignores_params() {
        let handlers = create_test_handlers();

        let with_params = handlers
            .dispatch(rpc_request(
                "initialize",
                Some(json!(1)),
                Some(json!({"protocolVersion": "1999-01-01", "clientInfo": {"name": "x"}})),
            ))
            .await
            .unwrap();
        let without_params = handlers
            .dispatch(rpc_request("initialize", Some(json!(1)), None))
            .await
            .unwrap();

        assert_eq!(with_params.result, without_params.result);
    }

    #[tokio::test]
    async fn test_initialized_notification_emits_nothing() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request("notifications/initialized", None, None))
            .await;

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_initialized_notification_ignores_id() {
        let handlers = create_test_handlers();

        // Even with an id present, a notification gets no acknowledgement
        let response = handlers
            .dispatch(rpc_request(
                "notifications/initialized",
                Some(json!(42)),
                None,
            ))
            .await;

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_has_search_and_fetch() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request("tools/list", Some(json!(2)), None))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["search", "fetch"]);

        for tool in tools {
            assert!(tool["description"].is_string());
            assert!(tool["input_schema"].is_object());
            assert!(tool["output_schema"].is_object());
        }
    }

    #[tokio::test]
    async fn test_unknown_method_is_method_not_found() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request("resources/list", Some(json!(3)), None))
            .await
            .unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert!(error.message.contains("resources/list"));
    }

    #[tokio::test]
    async fn test_missing_method_is_method_not_found() {
        let handlers = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(4)),
            method: None,
            params: None,
        };

        let response = handlers.dispatch(request).await.unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert_eq!(response.id, Some(json!(4)));
    }

    #[tokio::test]
    async fn test_tools_call_search_scenario() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(1)),
                Some(json!({"name": "search", "arguments": {"query": "python"}})),
            ))
            .await
            .unwrap();

        assert_eq!(response.id, Some(json!(1)));
        let result = response.result.unwrap();
        let results = result["results"].as_array().unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().any(|r| r["id"] == "doc1"));
    }

    #[tokio::test]
    async fn test_tools_call_fetch_scenario() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(1)),
                Some(json!({"name": "fetch", "arguments": {"id": "doc1"}})),
            ))
            .await
            .unwrap();

        assert_eq!(response.id, Some(json!(1)));
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["id"], "doc1");
        assert_eq!(result["title"], "Python Best Practices");
        assert!(result["url"].is_null());
        assert!(result["metadata"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_fetch_unknown_id_is_internal_error() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(1)),
                Some(json!({"name": "fetch", "arguments": {"id": "doc999"}})),
            ))
            .await
            .unwrap();

        assert_eq!(response.id, Some(json!(1)));
        assert!(response.result.is_none());

        let error = response.error.unwrap();
        assert_eq!(error.code, INTERNAL_ERROR);
        assert!(error.message.contains("doc999"));
    }

    #[tokio::test]
    async fn test_tools_call_string_arguments_is_invalid_params() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(5)),
                Some(json!({"name": "search", "arguments": "python"})),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("must be an object"));
        assert!(error.message.contains("string"));
    }

    #[tokio::test]
    async fn test_tools_call_array_arguments_is_invalid_params() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(5)),
                Some(json!({"name": "search", "arguments": ["python"]})),
            ))
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_method_not_found() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(6)),
                Some(json!({"name": "summarize", "arguments": {}})),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
        assert!(error.message.contains("summarize"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_arguments_defaults_to_empty() {
        let handlers = create_test_handlers();

        // search with no arguments behaves like an empty query
        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(7)),
                Some(json!({"name": "search"})),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["results"].as_array().unwrap().len(), 5);

        // fetch with no arguments fails in the handler, surfacing -32603
        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(8)),
                Some(json!({"name": "fetch"})),
            ))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, INTERNAL_ERROR);
        assert!(error.message.contains("Document ID is required"));
    }

    #[tokio::test]
    async fn test_tools_call_empty_query_returns_all_in_order() {
        let handlers = create_test_handlers();

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(9)),
                Some(json!({"name": "search", "arguments": {"query": ""}})),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        let ids: Vec<&str> = result["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, SAMPLE_DOC_IDS);
    }

    #[tokio::test]
    async fn test_dispatch_over_custom_document_set() {
        let services = Services::with_documents(Config::default(), tiny_document_set());
        let handlers = ProtocolHandlers::new(Arc::new(services));

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(1)),
                Some(json!({"name": "fetch", "arguments": {"id": "beta"}})),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["id"], "beta");
        // A document without metadata serializes it as null
        assert!(result["metadata"].is_null());
        assert!(result["url"].is_null());

        let response = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(2)),
                Some(json!({"name": "search", "arguments": {"query": "fixtures"}})),
            ))
            .await
            .unwrap();

        // "fixtures" appears only in alpha's metadata
        let result = response.result.unwrap();
        let results = result["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], "alpha");
        assert_eq!(results[0]["url"], "https://example.com/alpha");
    }

    #[tokio::test]
    async fn test_search_snippet_truncated_but_fetch_full() {
        let handlers = create_test_handlers();

        let search = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(10)),
                Some(json!({"name": "search", "arguments": {"query": "virtual environments"}})),
            ))
            .await
            .unwrap();
        let search_result = search.result.unwrap();
        let snippet = search_result["results"][0]["text"].as_str().unwrap();
        assert!(snippet.ends_with("..."));

        let fetch = handlers
            .dispatch(rpc_request(
                "tools/call",
                Some(json!(11)),
                Some(json!({"name": "fetch", "arguments": {"id": "doc1"}})),
            ))
            .await
            .unwrap();
        let fetch_result = fetch.result.unwrap();
        let full_text = fetch_result["text"].as_str().unwrap();
        assert!(full_text.chars().count() > snippet.chars().count());
        assert!(!full_text.ends_with("..."));
    }
}
