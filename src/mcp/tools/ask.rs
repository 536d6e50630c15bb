//! Question answering tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use tracing::{debug, info};

use super::common::failure;
use crate::answer;
use crate::api::InferenceClient;
use crate::config::Settings;
use crate::error::QaError;
use crate::mcp::types::AskArgs;
use crate::persona::Persona;
use crate::prompt;
use crate::session::SharedSessionStore;

/// Execute a question against the loaded repository.
pub async fn ask(
    store: &SharedSessionStore,
    settings: &Settings,
    args: AskArgs,
) -> Result<CallToolResult, McpError> {
    match run(store, settings, args).await {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => Ok(failure(e)),
    }
}

async fn run(
    store: &SharedSessionStore,
    settings: &Settings,
    args: AskArgs,
) -> Result<String, QaError> {
    let question = args.question.trim();
    if question.is_empty() {
        return Err(QaError::Validation("Missing question.".to_string()));
    }

    let session = store.current().await.ok_or(QaError::NoSession)?;

    // Credential check happens before any prompt is built or sent.
    let client = InferenceClient::from_settings(settings)?;

    let persona = Persona::resolve(args.persona.as_deref().unwrap_or_default());
    store.mark_persona(persona).await;

    let combined = prompt::build_combined_prompt(&session, question, persona);
    debug!(
        "Prompt assembled: {} chars, persona {}",
        combined.chars().count(),
        persona
    );

    let raw = client.generate(combined).await?;
    info!("Answer received from model {}", client.model());

    Ok(answer::finalize(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::create_shared_session_store;

    fn settings() -> Settings {
        Settings {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            max_context_chars: 16_000,
        }
    }

    #[tokio::test]
    async fn test_ask_before_load_yields_no_session() {
        let store = create_shared_session_store();
        let err = run(
            &store,
            &settings(),
            AskArgs {
                question: "how does the caching layer work".to_string(),
                persona: None,
            },
        )
        .await
        .unwrap_err();

        // The session check fires before the credential check, so this can
        // never turn into an inference call.
        assert!(matches!(err, QaError::NoSession));
    }

    #[tokio::test]
    async fn test_empty_question_is_validation_failure() {
        let store = create_shared_session_store();
        let err = run(
            &store,
            &settings(),
            AskArgs {
                question: "   ".to_string(),
                persona: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, QaError::Validation(_)));
    }
}
