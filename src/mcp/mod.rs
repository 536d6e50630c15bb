//! MCP request surface.
//!
//! Exposes the load/ask/health operations as MCP tools over stdio.

mod handlers;
mod server;
mod tools;
mod types;

pub use handlers::run_mcp_server;
