//! Post-processing of raw model output.
//!
//! Strips markdown decoration so answers render cleanly in plain-text
//! clients, and substitutes a guidance message for degenerate answers.

use regex::Regex;
use std::sync::OnceLock;

/// Fallback shown instead of empty or known-weak answers.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find an answer. Please try rephrasing your \
                                   question or ask for a specific file/module.";

/// Phrases treated as non-answers (compared case-insensitively after cleanup).
const DEGENERATE_PHRASES: &[&str] = &["i don't know", "not sure", "unknown"];

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("valid regex"))
}

fn line_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[#*\-\s]+").expect("valid regex"))
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*{1,3}").expect("valid regex"))
}

fn backtick_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`+").expect("valid regex"))
}

/// Strip markdown decoration from raw model output.
///
/// Removes fenced code blocks, leading heading/list/emphasis markers per
/// line, remaining emphasis and backtick markers, and surrounding whitespace.
pub fn clean(raw: &str) -> String {
    let s = fence_re().replace_all(raw, "");
    let s = line_marker_re().replace_all(&s, "");
    let s = emphasis_re().replace_all(&s, "");
    let s = backtick_re().replace_all(&s, "");
    s.trim().to_string()
}

/// Clean raw output, substituting the fallback for degenerate answers.
pub fn finalize(raw: &str) -> String {
    let cleaned = clean(raw);
    let lowered = cleaned.to_lowercase();
    if cleaned.is_empty() || DEGENERATE_PHRASES.contains(&lowered.as_str()) {
        FALLBACK_ANSWER.to_string()
    } else {
        cleaned
    }
}
