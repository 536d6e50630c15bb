//! Common utilities for MCP tools.

use rmcp::model::{CallToolResult, Content};

use crate::error::QaError;

/// Error result for tool failures
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Convert a pipeline failure into a tool error result.
///
/// Every failure is reported to the client as a structured error; nothing
/// propagates far enough to take the server down.
pub fn failure(err: QaError) -> CallToolResult {
    tool_error(err.to_string())
}
