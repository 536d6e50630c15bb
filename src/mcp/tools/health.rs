//! Health probe tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use serde_json::json;

use crate::session::SharedSessionStore;

/// Report process status and whether a repository is loaded.
pub async fn health(store: &SharedSessionStore) -> Result<CallToolResult, McpError> {
    let body = json!({
        "status": "ok",
        "has_active_session": store.current().await.is_some(),
    });

    Ok(CallToolResult::success(vec![Content::text(
        body.to_string(),
    )]))
}
