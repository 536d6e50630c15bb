//! Repository loading tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use serde::Serialize;
use tracing::info;

use super::common::failure;
use crate::api::{GithubClient, RepoMetadata, RepoUrl};
use crate::config::Settings;
use crate::error::QaError;
use crate::mcp::types::LoadRepositoryArgs;
use crate::persona::Persona;
use crate::repo;
use crate::session::{RepoSession, SharedSessionStore};

/// Maximum number of file paths echoed back to the client.
const MAX_RESPONSE_FILES: usize = 200;

/// Response payload for a successful load.
#[derive(Debug, Serialize)]
struct LoadResponse<'a> {
    message: &'static str,
    metadata: &'a RepoMetadata,
    files: &'a [String],
}

/// Execute a repository load: metadata, shallow snapshot, digest, session swap.
pub async fn load_repository(
    store: &SharedSessionStore,
    settings: &Settings,
    args: LoadRepositoryArgs,
) -> Result<CallToolResult, McpError> {
    match run(store, settings, args).await {
        Ok(result) => Ok(result),
        Err(e) => Ok(failure(e)),
    }
}

async fn run(
    store: &SharedSessionStore,
    settings: &Settings,
    args: LoadRepositoryArgs,
) -> Result<CallToolResult, QaError> {
    let repo_url = RepoUrl::parse(&args.repo_url)?;

    let metadata = GithubClient::new().fetch_metadata(&repo_url).await?;

    // The snapshot directory is removed when `snapshot` drops, on success and
    // on every early return below.
    let snapshot = repo::fetch_snapshot(repo_url.as_str()).await?;
    let report = repo::collect_files(snapshot.path());
    info!(
        "Collected {} files from {} ({} skipped)",
        report.records.len(),
        repo_url.full_name(),
        report.skipped.len()
    );

    let digest_full = repo::build_digest(&report.records);
    let digest = repo::excerpt(&digest_full, settings.max_context_chars).to_string();

    let session = RepoSession {
        repo_url: repo_url.as_str().to_string(),
        metadata,
        digest,
        files: report.paths(),
        last_persona: Persona::default(),
    };

    let shown = session.files.len().min(MAX_RESPONSE_FILES);
    let payload = serde_json::to_string_pretty(&LoadResponse {
        message: "Repository loaded successfully.",
        metadata: &session.metadata,
        files: &session.files[..shown],
    })
    .map_err(|e| QaError::Fetch(format!("Failed to encode load response: {}", e)))?;

    // Whole-session swap, and only after every stage succeeded: a failure
    // anywhere above leaves the previous session untouched.
    store.load(session).await;

    Ok(CallToolResult::success(vec![Content::text(payload)]))
}
