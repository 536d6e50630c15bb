//! Digest construction and character-budget excerpts.

use super::collector::FileRecord;

/// Characters of digest included in the question-time prompt.
pub const QUESTION_EXCERPT_CHARS: usize = 8_000;

/// Concatenate collected files into a single digest string.
///
/// Each file contributes a path header followed by its content; entries are
/// joined in traversal order with a blank line between them. No deduplication
/// and no relevance ordering.
pub fn build_digest(records: &[FileRecord]) -> String {
    let entries: Vec<String> = records
        .iter()
        .map(|r| format!("# File: {}\n{}\n", r.path, r.content))
        .collect();
    entries.join("\n")
}

/// First `max_chars` characters of `text`.
///
/// The cut is by character count, never inside a code point. It is not
/// token-aware and not file-boundary-aware: a file may be cut mid-content in
/// exchange for a predictable prompt size.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
