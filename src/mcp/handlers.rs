//! MCP server startup.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::session::SharedSessionStore;

use super::server::RepoQaServer;

/// Run the MCP server over stdio.
///
/// Blocks until the client disconnects or the transport fails.
pub async fn run_mcp_server(session_store: SharedSessionStore, settings: Settings) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting RepoQA MCP server (stdio, model {})", settings.model);
    if !settings.has_api_key() {
        warn!("GEMINI_API_KEY is not set; ask requests will fail until it is configured");
    }

    let server = RepoQaServer::new(session_store, settings);

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("Failed to start MCP service: {:?}", e);
        anyhow::anyhow!("Failed to start MCP service: {:?}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP service error: {:?}", e);
        anyhow::anyhow!("MCP service error: {:?}", e)
    })?;

    info!("MCP server shutting down");
    Ok(())
}
