//! Shared state for the HTTP adapter

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::services::Services;
use crate::mcp::handlers::ProtocolHandlers;

/// State threaded through every Axum handler
///
/// Built once at startup; cloning shares the same Arcs.
#[derive(Clone)]
pub struct AppState {
    /// Core services (document store, search, config)
    pub services: Arc<Services>,

    /// MCP dispatcher with its registered tools
    pub mcp: Arc<ProtocolHandlers>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let services = Arc::new(Services::new(config));
        let mcp = Arc::new(ProtocolHandlers::new(Arc::clone(&services)));

        Self { services, mcp }
    }
}
