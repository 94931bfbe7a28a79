//! OAuth stub endpoints for chat-client connector compatibility
//!
//! Deep-research connectors probe these endpoints before talking to
//! the MCP endpoint. The payloads are static or trivially generated;
//! no real authorization happens here and none of this is consumed by
//! the dispatcher.

use axum::{
    extract::{Host, Query},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

/// GET /.well-known/oauth-authorization-server
pub async fn metadata_handler(Host(host): Host) -> Json<Value> {
    let base_url = format!("https://{host}");

    Json(json!({
        "issuer": base_url,
        "authorization_endpoint": format!("{base_url}/oauth/authorize"),
        "token_endpoint": format!("{base_url}/oauth/token"),
        "registration_endpoint": format!("{base_url}/oauth/register"),
        "grant_types_supported": ["authorization_code"],
        "response_types_supported": ["code"],
        "scopes_supported": ["read"]
    }))
}

#[derive(Debug, Deserialize)]
pub struct AuthorizeParams {
    #[allow(dead_code)]
    pub response_type: Option<String>,

    #[allow(dead_code)]
    pub client_id: Option<String>,

    pub redirect_uri: Option<String>,

    pub state: Option<String>,
}

/// GET /oauth/authorize
///
/// Issues a throwaway authorization code and bounces straight back to
/// the client's redirect_uri.
pub async fn authorize_handler(Query(params): Query<AuthorizeParams>) -> Response {
    let code = Uuid::new_v4().simple().to_string();
    let redirect_uri = params.redirect_uri.unwrap_or_default();
    let state = params.state.unwrap_or_default();

    info!("OAuth authorize request, redirecting to client");

    let target = format!("{redirect_uri}?code={code}&state={state}");
    Redirect::temporary(&target).into_response()
}

/// POST /oauth/register
pub async fn register_handler() -> Json<Value> {
    Json(json!({
        "client_id": "mcp_client",
        "client_secret": "mcp_secret",
        "application_type": "web",
        "grant_types": ["authorization_code"],
        "scope": "read"
    }))
}

/// POST /oauth/token
pub async fn token_handler() -> Json<Value> {
    Json(json!({
        "access_token": "mcp_access_token",
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "read"
    }))
}
