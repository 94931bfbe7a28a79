//! docbase HTTP server entry point
//!
//! Starts the MCP-over-SSE server for the built-in knowledge base.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docbase::core::config::Config;
use docbase::http::{self, AppState};

#[derive(Debug, Parser)]
#[command(name = "docbase", version, about = "MCP knowledge-base server (streamable HTTP / SSE)")]
struct Cli {
    /// Bind address (overrides config file)
    #[arg(long, env = "DOCBASE_HOST")]
    host: Option<String>,

    /// Bind port (overrides config file)
    #[arg(long, env = "DOCBASE_PORT")]
    port: Option<u16>,

    /// Server display name (overrides config file)
    #[arg(long, env = "DOCBASE_SERVER_NAME")]
    name: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "DOCBASE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docbase=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docbase MCP server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config
        }
        None => Config::load()?,
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(name) = cli.name {
        config.server.name = name;
    }
    config.validate()?;
    config.log_config();

    // Build shared state and the router
    let state = AppState::new(config.clone());
    tracing::info!(
        "Knowledge base: {} documents, tools: {}",
        state.services.store.len(),
        state.mcp.tool_names().join(", ")
    );

    let app = http::router(state);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("MCP endpoint at http://{}/mcp", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
