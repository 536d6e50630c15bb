//! MCP tool parameter types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the load_repository tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LoadRepositoryArgs {
    /// URL of the public GitHub repository to load
    pub repo_url: String,
}

/// Parameters for the ask tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AskArgs {
    /// The question about the loaded repository
    pub question: String,
    /// Audience persona: beginner, intermediate or advanced (defaults to beginner)
    #[serde(default)]
    pub persona: Option<String>,
}

/// Parameters for the health tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HealthArgs {}
