//! Shared HTTP plumbing for the external service clients.

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Retry schedule: up to 3 retries with exponential backoff from 1s, plus
/// up to 25% jitter.
const MAX_RETRIES: usize = 3;
const BASE_DELAY_MS: u64 = 1_000;

/// Characters of a provider error body kept in diagnostics.
const ERROR_BODY_LIMIT: usize = 200;

fn is_retriable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn is_retriable_send_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn backoff_delay(attempt: usize) -> Duration {
    let base = BASE_DELAY_MS.saturating_mul(1u64 << attempt.min(10));
    let jitter = rand::thread_rng().gen_range(0..=base / 4);
    Duration::from_millis(base + jitter)
}

/// Send a request, retrying transient failures.
///
/// Non-retriable statuses are returned to the caller for error mapping;
/// only timeouts, connection errors and 408/429/5xx responses are retried.
pub(super) async fn send_with_retry(
    mut make_request: impl FnMut() -> reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let mut attempt = 0;
    loop {
        match make_request().send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() || !is_retriable_status(status) || attempt >= MAX_RETRIES {
                    return Ok(response);
                }
                let delay = backoff_delay(attempt);
                debug!(
                    "HTTP {} response; retrying in {:?} (attempt {}/{})",
                    status,
                    delay,
                    attempt + 1,
                    MAX_RETRIES
                );
                let _ = response.bytes().await;
                sleep(delay).await;
            }
            Err(err) => {
                if !is_retriable_send_error(&err) || attempt >= MAX_RETRIES {
                    return Err(anyhow::Error::new(err))
                        .with_context(|| format!("HTTP request failed after {} attempt(s)", attempt + 1));
                }
                let delay = backoff_delay(attempt);
                debug!(
                    "HTTP send error: {}; retrying in {:?} (attempt {}/{})",
                    err,
                    delay,
                    attempt + 1,
                    MAX_RETRIES
                );
                sleep(delay).await;
            }
        }
        attempt += 1;
    }
}

/// Read an error response body, truncated for diagnostics.
pub(super) async fn error_body(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

/// User-Agent for outbound requests.
pub(super) fn user_agent() -> String {
    format!("repoqa.cli/{}", env!("CARGO_PKG_VERSION"))
}
