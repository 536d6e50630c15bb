//! Error types for the request pipeline.
//!
//! Every failure that can reach a client is one of these variants. Handlers
//! convert them into structured tool errors at the request boundary; nothing
//! here is allowed to take the process down.

use thiserror::Error;

/// Failures surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum QaError {
    /// The caller's input is missing or malformed. Retrying without a fix
    /// is pointless.
    #[error("{0}")]
    Validation(String),

    /// The VCS clone or the metadata API call failed. Carries the provider's
    /// diagnostic; the caller may retry.
    #[error("{0}")]
    Fetch(String),

    /// The process is misconfigured (e.g. missing inference credential).
    /// Operator-fixable, not user-fixable.
    #[error("{0}")]
    Configuration(String),

    /// The inference backend call itself failed. Safe to retry.
    #[error("{0}")]
    Inference(String),

    /// A question arrived before any repository was loaded.
    #[error("No repository loaded yet. Please load a repository first.")]
    NoSession,
}
