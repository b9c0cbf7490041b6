//! Search envelope: the stable shape handed back to the agent
//!
//! ```json
//! {
//!   "query": "rate limit error",
//!   "total": 2,
//!   "articles": [
//!     {"id": "https://…", "title": "…", "url": "https://…", "snippet": "…", "source": "support.example.com", "score": 0.93}
//!   ],
//!   "note": "Article IDs are URLs. …"
//! }
//! ```
//!
//! `total` always equals `articles.len()`, and no article has an empty URL.
//! Both hold because the envelope can only be built by [`ResultFormatter`].

use super::result::SearchResult;
use crate::core::error::RetrievalError;
use serde::{Deserialize, Serialize};

/// Note attached when the backend had nothing to return
pub const NO_RESULTS_NOTE: &str = "No results found.";

/// Note attached to every non-empty envelope. The agent relies on it to
/// discover the follow-up fetch tool.
pub const FETCH_HINT_NOTE: &str =
    "Article IDs are URLs. Use get_article_content to fetch full content when needed.";

/// One article entry in the envelope
///
/// `score` and `raw_content` appear only when the backend supplied them;
/// raw content is only returned when it was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Identifier, identical to `url`
    pub id: String,
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// Formatted search output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    query: String,
    total: usize,
    articles: Vec<ArticleSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl SearchEnvelope {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn articles(&self) -> &[ArticleSummary] {
        &self.articles
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Serialize with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Projects raw backend results into a [`SearchEnvelope`].
///
/// Pure: no I/O, no hidden state, no failure path.
pub struct ResultFormatter;

impl ResultFormatter {
    /// Build the envelope for `results`, preserving backend order.
    pub fn format(
        results: &[SearchResult],
        original_query: &str,
        source_domain: Option<&str>,
    ) -> SearchEnvelope {
        if results.is_empty() {
            return Self::empty(original_query);
        }

        let source = source_domain
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let articles: Vec<ArticleSummary> = results
            .iter()
            .filter(|r| r.is_referenceable())
            .map(|r| {
                let url = r.url.trim().to_string();
                ArticleSummary {
                    id: url.clone(),
                    title: r.title.clone(),
                    url,
                    snippet: r.snippet.clone(),
                    source: source.clone(),
                    score: r.score,
                    raw_content: r.raw_content.clone(),
                }
            })
            .collect();

        SearchEnvelope {
            query: original_query.to_string(),
            total: articles.len(),
            articles,
            note: Some(FETCH_HINT_NOTE.to_string()),
        }
    }

    /// Envelope for a query that produced nothing
    pub fn empty(original_query: &str) -> SearchEnvelope {
        SearchEnvelope {
            query: original_query.to_string(),
            total: 0,
            articles: Vec::new(),
            note: Some(NO_RESULTS_NOTE.to_string()),
        }
    }
}

/// Error payload returned in place of an envelope when a search fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFailure {
    pub error: String,
    pub kind: String,
    pub query: String,
}

impl SearchFailure {
    pub fn new(query: impl Into<String>, error: &RetrievalError) -> Self {
        Self {
            error: error.to_string(),
            kind: error.kind().as_str().to_string(),
            query: query.into(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
