//! HTTP middleware
//!
//! Request logging with latency tracking for every endpoint.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Log every request with method, path, status, and latency
///
/// 2xx/3xx land at INFO; client and server errors at WARN so failed
/// connector probes stand out in the logs.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        info!(%method, path, status = status.as_u16(), latency_ms, "request handled");
    }

    response
}
