//! Search result entity

use serde::{Deserialize, Serialize};

/// Title used when the backend omits one
pub const PLACEHOLDER_TITLE: &str = "Untitled";

/// One ranked entry returned by the search backend.
///
/// The `url` doubles as the result's identifier and as the target of a
/// later article fetch. Entries with a blank `url` are never shown to the
/// agent; see [`SearchResult::is_referenceable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    /// Backend relevance score, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Full page text, only present when raw content was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl SearchResult {
    pub fn new(
        url: impl Into<String>,
        title: Option<String>,
        snippet: impl Into<String>,
    ) -> Self {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
        Self {
            url: url.into().trim().to_string(),
            title,
            snippet: snippet.into(),
            score: None,
            raw_content: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_raw_content(mut self, raw_content: impl Into<String>) -> Self {
        self.raw_content = Some(raw_content.into());
        self
    }

    /// Whether the result can be referenced by a later fetch
    pub fn is_referenceable(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
