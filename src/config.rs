//! Process configuration, read once from the environment at startup.

use tracing::warn;

/// Inference model used when `GEMINI_MODEL` is unset.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Digest budget in characters when `MAX_CONTEXT_CHARS` is unset.
const DEFAULT_MAX_CONTEXT_CHARS: usize = 16_000;

/// Inference API base URL. Overridable with `GEMINI_API_URL` for proxies.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Runtime settings shared by the request handlers.
///
/// Read once at startup; changing the environment afterwards has no effect
/// on a running process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Inference credential. May be empty; `ask` rejects requests until set.
    pub api_key: String,
    /// Inference model identifier.
    pub model: String,
    /// Inference API base URL.
    pub api_url: String,
    /// Character budget for the stored digest.
    pub max_context_chars: usize,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// A model passed on the command line (`-m/--model`) takes precedence
    /// over `GEMINI_MODEL`.
    pub fn from_env(model_override: Option<String>) -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();

        let model = model_override
            .or_else(|| std::env::var("GEMINI_MODEL").ok())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_url =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let max_context_chars = match std::env::var("MAX_CONTEXT_CHARS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid MAX_CONTEXT_CHARS value {:?}, using default", raw);
                DEFAULT_MAX_CONTEXT_CHARS
            }),
            Err(_) => DEFAULT_MAX_CONTEXT_CHARS,
        };

        Self {
            api_key,
            model,
            api_url,
            max_context_chars,
        }
    }

    /// Whether an inference credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
