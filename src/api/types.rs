//! Wire types for the external metadata and inference services.

use serde::{Deserialize, Serialize};

/// License object inside the GitHub repository payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawLicense {
    #[serde(default)]
    pub name: Option<String>,
}

/// Repository payload from the GitHub REST API.
///
/// Only the fields used for prompt construction are modeled; everything else
/// in the payload is ignored. Every field defaults so a sparse response never
/// fails deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawRepository {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<RawLicense>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Validated repository metadata, shaped for display.
///
/// Serialized keys use display casing so the pretty-printed metadata block in
/// the prompt reads naturally. Built once per load, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMetadata {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Stars")]
    pub stars: u64,
    #[serde(rename = "Forks")]
    pub forks: u64,
    #[serde(rename = "Open Issues")]
    pub open_issues: u64,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "License")]
    pub license: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl From<RawRepository> for RepoMetadata {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            full_name: raw.full_name.unwrap_or_default(),
            description: raw
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description provided.".to_string()),
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            open_issues: raw.open_issues_count,
            language: raw.language,
            license: raw
                .license
                .and_then(|l| l.name)
                .unwrap_or_else(|| "None".to_string()),
            url: raw.html_url.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Inference wire types (generateContent endpoint)
// ============================================================================

/// Single-prompt request body.
#[derive(Debug, Serialize)]
pub(super) struct GenerateContentRequest {
    pub contents: Vec<ContentEntry>,
}

#[derive(Debug, Serialize)]
pub(super) struct ContentEntry {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub(super) struct TextPart {
    pub text: String,
}

/// Response body; all fields default so degenerate responses parse cleanly.
#[derive(Debug, Default, Deserialize)]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or empty if absent.
    ///
    /// A missing candidate is not an error here; the answer post-processor
    /// turns empty text into the fallback message.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults_for_sparse_payload() {
        let raw: RawRepository = serde_json::from_str(r#"{"name": "demo"}"#).unwrap();
        let meta = RepoMetadata::from(raw);

        assert_eq!(meta.name, "demo");
        assert_eq!(meta.description, "No description provided.");
        assert_eq!(meta.license, "None");
        assert_eq!(meta.stars, 0);
        assert_eq!(meta.language, None);
    }

    #[test]
    fn test_metadata_maps_full_payload() {
        let raw: RawRepository = serde_json::from_str(
            r#"{
                "name": "demo",
                "full_name": "octocat/demo",
                "description": "A demo repository",
                "stargazers_count": 42,
                "forks_count": 7,
                "open_issues_count": 3,
                "language": "Rust",
                "license": {"name": "MIT License"},
                "html_url": "https://github.com/octocat/demo"
            }"#,
        )
        .unwrap();
        let meta = RepoMetadata::from(raw);

        assert_eq!(meta.full_name, "octocat/demo");
        assert_eq!(meta.stars, 42);
        assert_eq!(meta.license, "MIT License");
        assert_eq!(meta.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_metadata_serializes_display_keys() {
        let raw = RawRepository {
            name: Some("demo".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&RepoMetadata::from(raw)).unwrap();

        assert!(json.contains("\"Name\""));
        assert!(json.contains("\"Full Name\""));
        assert!(json.contains("\"Open Issues\""));
        assert!(json.contains("\"License\""));
    }

    #[test]
    fn test_response_text_extraction() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "there"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.text(), "Hello there");
    }

    #[test]
    fn test_response_text_empty_on_missing_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), "");

        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(parsed.text(), "");
    }
}
