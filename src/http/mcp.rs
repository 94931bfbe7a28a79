//! MCP-over-SSE endpoint
//!
//! Wraps the JSON-RPC dispatcher in the streamable HTTP transport:
//! the request body is a single JSON-RPC envelope, the response is a
//! text/event-stream carrying zero or one `data:` frames. A malformed
//! body gets a plain HTTP 400 with no stream.

use std::convert::Infallible;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{sse::Event, IntoResponse, Response, Sse},
    Json,
};
use futures::stream;
use serde_json::json;
use tracing::{debug, error};

use crate::http::state::AppState;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};

/// POST /mcp handler (also mounted at the legacy /sse path)
pub async fn mcp_handler(State(state): State<AppState>, body: String) -> Response {
    let request: JsonRpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse JSON body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid JSON"})),
            )
                .into_response();
        }
    };

    debug!(method = ?request.method, id = ?request.id, "Dispatching MCP request");

    let envelope = state.mcp.dispatch(request).await;
    sse_response(envelope)
}

/// Frame the dispatch outcome as a finite SSE stream
///
/// Notifications yield an empty stream; everything else yields one
/// `data: <json>` frame. The stream ends (and the connection closes)
/// once the frames are flushed. A client that disconnects mid-stream
/// simply drops the stream; no cleanup is needed.
fn sse_response(envelope: Option<JsonRpcResponse>) -> Response {
    let frames: Vec<Result<Event, Infallible>> =
        envelope.into_iter().map(|e| Ok(frame(&e))).collect();

    let sse = Sse::new(stream::iter(frames));

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        sse,
    )
        .into_response()
}

fn frame(envelope: &JsonRpcResponse) -> Event {
    match Event::default().json_data(envelope) {
        Ok(event) => event,
        Err(e) => {
            // Unreachable for these types; emit a well-formed error
            // frame rather than panicking in the transport.
            error!("Failed to serialize envelope: {}", e);
            Event::default().data(
                r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"serialization failure"}}"#,
            )
        }
    }
}
