//! HTTP adapter
//!
//! Axum endpoints for the server descriptor, health check, the
//! MCP-over-SSE endpoint, and the OAuth compatibility stubs. This
//! adapter depends on both core/ and mcp/: the SSE endpoint wraps
//! the MCP dispatcher's output in event-stream frames.

pub mod handlers;
pub mod mcp;
pub mod middleware;
pub mod oauth;
pub mod state;

pub use handlers::{health_handler, root_handler};
pub use mcp::mcp_handler;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// Build the application router
///
/// `/sse` is a legacy alias kept for older connector configurations;
/// it serves the same single-shot handler as `/mcp`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/mcp", post(mcp::mcp_handler))
        .route("/sse", post(mcp::mcp_handler))
        .route(
            "/.well-known/oauth-authorization-server",
            get(oauth::metadata_handler),
        )
        .route("/oauth/authorize", get(oauth::authorize_handler))
        .route("/oauth/register", post(oauth::register_handler))
        .route("/oauth/token", post(oauth::token_handler))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
