//! Prompt assembly for repository questions.
//!
//! The system prompt is built from fixed sections in a fixed order; the only
//! variable parts are the persona strings, the metadata block, the file list
//! and the digest excerpt. Everything is bounded so prompt size stays
//! predictable.

use crate::api::RepoMetadata;
use crate::persona::Persona;
use crate::repo;
use crate::session::RepoSession;

/// Number of file paths listed in the prompt.
const MAX_PROMPT_FILES: usize = 20;

/// Placeholder when the collector retained nothing.
const NO_FILES_PLACEHOLDER: &str = "(no files found)";

/// Questions with fewer whitespace-separated tokens than this get a
/// clarifying-question hint in the user turn.
const SHORT_QUESTION_TOKENS: usize = 3;

const GROUNDING_DIRECTIVE: &str = "Always answer ONLY about the repository itself. Do not mention \
                                   cloning or scraping. If you are unsure, say you don't know.";

const FORMAT_DIRECTIVE: &str = "Format your answer in markdown with bullet points, code blocks, \
                                and headings where appropriate.";

const FEEDBACK_NOTE: &str = "If this answer was helpful, let us know! If not, please suggest how \
                             it could be improved.";

/// Build the system prompt for a question about the loaded repository.
///
/// Sections in fixed order: persona framing, persona instructions, grounding
/// directive, formatting directive, few-shot examples, metadata, file list,
/// digest excerpt, feedback note.
pub fn build_system_prompt(
    metadata: &RepoMetadata,
    files: &[String],
    digest_excerpt: &str,
    persona: Persona,
) -> String {
    let meta_pretty =
        serde_json::to_string_pretty(metadata).unwrap_or_else(|_| "{}".to_string());

    let files_block = if files.is_empty() {
        NO_FILES_PLACEHOLDER.to_string()
    } else {
        files
            .iter()
            .take(MAX_PROMPT_FILES)
            .map(|p| format!("- {}", p))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are a helpful assistant for a {}.\n",
        persona.label()
    ));
    prompt.push_str(persona.instructions());
    prompt.push('\n');
    prompt.push_str(GROUNDING_DIRECTIVE);
    prompt.push('\n');
    prompt.push_str(FORMAT_DIRECTIVE);
    prompt.push_str("\n\nHere are some example Q&A for your style:\n");
    prompt.push_str(persona.example());
    prompt.push_str("\n\nRepository metadata:\n");
    prompt.push_str(&meta_pretty);
    prompt.push_str("\n\nImportant files (truncated):\n");
    prompt.push_str(&files_block);
    prompt.push_str("\n\nDigest excerpt (truncated):\n");
    prompt.push_str(digest_excerpt);
    prompt.push_str("\n\n");
    prompt.push_str(FEEDBACK_NOTE);
    prompt
}

/// Build the user turn for a question.
///
/// Very short questions carry an explicit invitation for the model to ask a
/// clarifying question first. This is a textual hint only; nothing enforces
/// compliance.
pub fn build_user_turn(question: &str, persona: Persona) -> String {
    if question.split_whitespace().count() < SHORT_QUESTION_TOKENS {
        format!(
            "The user question is very short. If you need clarification, ask a clarifying \
             question first.\nQuestion: {}\nAnswer for a {}.",
            question,
            persona.label()
        )
    } else {
        format!("Question: {}\nAnswer for a {}.", question, persona.label())
    }
}

/// Combined single-string prompt handed to the inference backend.
///
/// The digest excerpt is cut at question time to its own, smaller budget.
pub fn build_combined_prompt(session: &RepoSession, question: &str, persona: Persona) -> String {
    let digest_excerpt = repo::excerpt(&session.digest, repo::QUESTION_EXCERPT_CHARS);
    let system = build_system_prompt(&session.metadata, &session.files, digest_excerpt, persona);
    let user = build_user_turn(question, persona);
    format!("{}\n\n{}", system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RepoMetadata {
        RepoMetadata {
            name: "demo".to_string(),
            full_name: "octocat/demo".to_string(),
            description: "A demo repository".to_string(),
            stars: 42,
            forks: 7,
            open_issues: 3,
            language: Some("Rust".to_string()),
            license: "MIT License".to_string(),
            url: "https://github.com/octocat/demo".to_string(),
        }
    }

    fn session(digest: &str, files: Vec<String>) -> RepoSession {
        RepoSession {
            repo_url: "https://github.com/octocat/demo".to_string(),
            metadata: metadata(),
            digest: digest.to_string(),
            files,
            last_persona: Persona::default(),
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let files = vec!["src/main.rs".to_string()];
        let prompt = build_system_prompt(&metadata(), &files, "digest here", Persona::Beginner);

        let framing = prompt.find("You are a helpful assistant").unwrap();
        let grounding = prompt.find("Do not mention cloning or scraping").unwrap();
        let format = prompt.find("Format your answer in markdown").unwrap();
        let examples = prompt.find("example Q&A for your style").unwrap();
        let meta = prompt.find("Repository metadata:").unwrap();
        let files_at = prompt.find("Important files (truncated):").unwrap();
        let digest = prompt.find("Digest excerpt (truncated):").unwrap();
        let feedback = prompt.find("If this answer was helpful").unwrap();

        let order = [
            framing, grounding, format, examples, meta, files_at, digest, feedback,
        ];
        for pair in order.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_file_list_caps_at_twenty() {
        let files: Vec<String> = (0..50).map(|i| format!("file{}.rs", i)).collect();
        let prompt = build_system_prompt(&metadata(), &files, "", Persona::Intermediate);

        assert!(prompt.contains("- file0.rs"));
        assert!(prompt.contains("- file19.rs"));
        assert!(!prompt.contains("- file20.rs"));
    }

    #[test]
    fn test_empty_file_list_uses_placeholder() {
        let prompt = build_system_prompt(&metadata(), &[], "", Persona::Beginner);
        assert!(prompt.contains("(no files found)"));
    }

    #[test]
    fn test_metadata_is_pretty_printed() {
        let prompt = build_system_prompt(&metadata(), &[], "", Persona::Advanced);
        assert!(prompt.contains("\"Full Name\": \"octocat/demo\""));
        assert!(prompt.contains("\"Stars\": 42"));
    }

    #[test]
    fn test_short_question_gets_clarifying_hint() {
        let turn = build_user_turn("hi", Persona::Beginner);
        assert!(turn.contains("ask a clarifying question first"));
        assert!(turn.contains("Question: hi"));
    }

    #[test]
    fn test_longer_question_omits_clarifying_hint() {
        let turn = build_user_turn("how does the caching layer work", Persona::Beginner);
        assert!(!turn.contains("ask a clarifying question first"));
        assert!(turn.starts_with("Question: how does the caching layer work"));
        assert!(turn.ends_with("Answer for a student (beginner)."));
    }

    #[test]
    fn test_two_token_question_is_still_short() {
        let turn = build_user_turn("explain this", Persona::Advanced);
        assert!(turn.contains("ask a clarifying question first"));
    }

    #[test]
    fn test_combined_prompt_cuts_digest_at_question_budget() {
        let digest = "d".repeat(16_000);
        let session = session(&digest, vec!["a.rs".to_string()]);
        let combined = build_combined_prompt(&session, "what is this project about", Persona::Beginner);

        // The stored 16k digest is cut to the 8k question-time excerpt.
        assert!(combined.contains(&"d".repeat(8_000)));
        assert!(!combined.contains(&"d".repeat(8_001)));
        assert!(combined.ends_with("Answer for a student (beginner)."));
    }

    #[test]
    fn test_combined_prompt_joins_system_and_user_turn() {
        let session = session("small digest", vec![]);
        let combined = build_combined_prompt(&session, "hi", Persona::Intermediate);

        let system_at = combined.find("You are a helpful assistant").unwrap();
        let user_at = combined.find("The user question is very short").unwrap();
        assert!(system_at < user_at);
    }
}
