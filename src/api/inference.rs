//! Client for the remote inference backend.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::http::{error_body, send_with_retry, user_agent};
use super::types::{ContentEntry, GenerateContentRequest, GenerateContentResponse, TextPart};
use crate::config::Settings;
use crate::error::QaError;

/// Timeout for inference requests.
const INFERENCE_TIMEOUT_SECS: u64 = 30;

/// Client for the text-generation endpoint.
#[derive(Debug)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    user_agent: String,
}

impl InferenceClient {
    /// Build a client from process settings.
    ///
    /// A missing credential is a configuration failure, reported before any
    /// network call is attempted.
    pub fn from_settings(settings: &Settings) -> Result<Self, QaError> {
        if !settings.has_api_key() {
            return Err(QaError::Configuration(
                "Gemini API key not configured. Set GEMINI_API_KEY env var.".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(INFERENCE_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            user_agent: user_agent(),
        })
    }

    /// Generate free-form text from a single combined prompt.
    pub async fn generate(&self, prompt: String) -> Result<String, QaError> {
        // The key travels as a query parameter; keep it out of the logs.
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![ContentEntry {
                parts: vec![TextPart { text: prompt }],
            }],
        };
        let request_id = Uuid::new_v4().to_string();

        debug!("Calling inference model {}", self.model);

        let response = send_with_retry(|| {
            self.client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("User-Agent", &self.user_agent)
                .header("x-request-id", &request_id)
                .json(&body)
        })
        .await
        .map_err(|e| QaError::Inference(format!("An error occurred: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let diag = error_body(response).await;
            return Err(QaError::Inference(format!(
                "Inference backend error {}: {}",
                status.as_u16(),
                diag
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| QaError::Inference(format!("Failed to parse inference response: {}", e)))?;

        Ok(parsed.text())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
