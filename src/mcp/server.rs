//! MCP server implementation.
//!
//! This module contains the RepoQaServer struct and its tool routing.

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::config::Settings;
use crate::session::SharedSessionStore;

use super::tools;
use super::types::*;

/// RepoQA MCP server
#[derive(Clone)]
pub struct RepoQaServer {
    session_store: SharedSessionStore,
    settings: Settings,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RepoQaServer {
    /// Create a new RepoQA MCP server
    ///
    /// # Arguments
    /// * `session_store` - Shared single-slot store for the active repository
    /// * `settings` - Process settings (model, credential, context budget)
    pub fn new(session_store: SharedSessionStore, settings: Settings) -> Self {
        Self {
            session_store,
            settings,
            tool_router: Self::tool_router(),
        }
    }

    /// Load a public GitHub repository into the active session
    #[tool(
        name = "load_repository",
        description = "Load a public GitHub repository: fetches its metadata, takes a shallow snapshot of its default branch and condenses the files into a bounded text digest for later questions. Replaces any previously loaded repository wholesale. Returns the repository metadata and the collected file list (up to 200 paths)."
    )]
    async fn load_repository(
        &self,
        Parameters(args): Parameters<LoadRepositoryArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::load_repository(&self.session_store, &self.settings, args).await
    }

    /// Ask a question about the loaded repository
    #[tool(
        name = "ask",
        description = "Answer a natural-language question about the loaded repository. The answer is tailored to an audience persona (beginner, intermediate or advanced; anything else falls back to beginner). Requires a prior successful load_repository call in this process."
    )]
    async fn ask(&self, Parameters(args): Parameters<AskArgs>) -> Result<CallToolResult, McpError> {
        tools::ask(&self.session_store, &self.settings, args).await
    }

    /// Report server health
    #[tool(
        name = "health",
        description = "Report server status and whether a repository is currently loaded."
    )]
    async fn health(
        &self,
        Parameters(_args): Parameters<HealthArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::health(&self.session_store).await
    }
}

#[tool_handler]
impl ServerHandler for RepoQaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "repoqa".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "RepoQA MCP Server loads a public GitHub repository and answers questions \
                 about it, tailored to an audience persona."
                    .to_string(),
            ),
        }
    }
}
