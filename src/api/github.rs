//! Repository locators and the metadata API client.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::http::{error_body, send_with_retry, user_agent};
use super::types::{RawRepository, RepoMetadata};
use crate::error::QaError;

/// Timeout for metadata requests.
const METADATA_TIMEOUT_SECS: u64 = 20;

/// Metadata API base.
const API_BASE: &str = "https://api.github.com";

fn invalid_url() -> QaError {
    QaError::Validation("Please provide a valid GitHub repository URL.".to_string())
}

/// A validated reference to a hosted GitHub repository.
///
/// Holds the original URL (used for cloning) plus the owner/name pair the
/// metadata API wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    url: String,
    owner: String,
    name: String,
}

impl RepoUrl {
    /// Validate a user-supplied repository URL.
    ///
    /// The locator must parse as a URL, carry the github.com host marker and
    /// end in an owner/name pair. A trailing `.git` on the name is accepted
    /// and stripped for API purposes; the URL itself is kept as given.
    pub fn parse(input: &str) -> Result<Self, QaError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid_url());
        }

        let parsed = Url::parse(trimmed).map_err(|_| invalid_url())?;

        let host_ok = parsed
            .host_str()
            .map(|h| h == "github.com" || h.ends_with(".github.com"))
            .unwrap_or(false);
        if !host_ok {
            return Err(invalid_url());
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        let (owner, name) = match segments.as_slice() {
            [.., owner, name] => (*owner, name.trim_end_matches(".git")),
            _ => return Err(invalid_url()),
        };
        if owner.is_empty() || name.is_empty() {
            return Err(invalid_url());
        }

        Ok(Self {
            url: trimmed.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// The URL as the caller supplied it (modulo trimming).
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// `owner/name` pair used by the metadata API.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Client for the repository metadata API.
pub struct GithubClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl GithubClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(METADATA_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: API_BASE.to_string(),
            user_agent: user_agent(),
        }
    }

    /// Fetch metadata for a repository.
    ///
    /// Any non-success status surfaces as a fetch failure carrying the status
    /// code and a truncated diagnostic body.
    pub async fn fetch_metadata(&self, repo: &RepoUrl) -> Result<RepoMetadata, QaError> {
        let url = format!("{}/repos/{}", self.base_url, repo.full_name());
        let request_id = Uuid::new_v4().to_string();

        debug!("Fetching repository metadata from {}", url);

        let response = send_with_retry(|| {
            self.client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .header("User-Agent", &self.user_agent)
                .header("x-request-id", &request_id)
        })
        .await
        .map_err(|e| QaError::Fetch(format!("Metadata request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(QaError::Fetch(format!(
                "GitHub API error {}: {}",
                status.as_u16(),
                body
            )));
        }

        let raw: RawRepository = response
            .json()
            .await
            .map_err(|e| QaError::Fetch(format!("Failed to parse metadata response: {}", e)))?;

        Ok(RepoMetadata::from(raw))
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
