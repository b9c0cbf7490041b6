//! Article subdomain: validating fetch targets and shaping fetched text
//!
//! An article identifier is just the URL a previous search surfaced. It is
//! dereferenced directly; nothing here resolves it through the search index.
//!
//! Truncation is positional and counted in characters. The body may end
//! mid-word or mid-tag; callers must tolerate that.

use crate::core::error::RetrievalError;
use serde::{Deserialize, Serialize};

/// Characters returned when the caller does not ask for a size
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// Upper bound on characters returned by one fetch
pub const MAX_ARTICLE_CHARS: usize = 100_000;

/// A validated fetch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    url: String,
    max_chars: usize,
}

impl ArticleRequest {
    /// Validate `identifier` and clamp `max_chars` into `[0, ceiling]`.
    ///
    /// Zero is honored and yields an empty body behind the URL frame.
    ///
    /// The identifier must start with `http://` or `https://` (any case)
    /// and have something after the scheme.
    pub fn parse(identifier: &str, max_chars: i64, ceiling: usize) -> Result<Self, RetrievalError> {
        let url = identifier.trim();
        if !looks_like_http_url(url) {
            return Err(RetrievalError::Validation(format!(
                "article_id must be an http(s) URL returned by a search, got '{}'",
                url
            )));
        }

        let ceiling = ceiling.clamp(1, MAX_ARTICLE_CHARS);
        let max_chars = max_chars.clamp(0, ceiling as i64) as usize;

        Ok(Self {
            url: url.to_string(),
            max_chars,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

fn looks_like_http_url(candidate: &str) -> bool {
    let lower = candidate.to_ascii_lowercase();
    ["http://", "https://"].iter().any(|scheme| {
        lower
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.trim().is_empty())
    })
}

/// Fetched article text, already truncated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub url: String,
    pub content: String,
    /// Whether `content` was cut short
    pub truncated: bool,
    /// Characters received before truncation. When the source stopped
    /// reading early this is a lower bound on the article's length.
    pub original_chars: usize,
}

impl ArticleContent {
    /// Keep at most `max_chars` characters of `body`.
    pub fn truncate(url: impl Into<String>, body: &str, max_chars: usize) -> Self {
        let cut = body
            .char_indices()
            .nth(max_chars)
            .map(|(byte_idx, _)| byte_idx);

        let (content, truncated, original_chars) = match cut {
            Some(byte_idx) => (
                body[..byte_idx].to_string(),
                true,
                body.chars().count(),
            ),
            None => (body.to_string(), false, body.chars().count()),
        };

        Self {
            url: url.into(),
            content,
            truncated,
            original_chars,
        }
    }

    /// Text with the source URL in front, so provenance survives even when
    /// only the content is inspected downstream.
    pub fn framed(&self) -> String {
        format!("URL: {}\n\nContent:\n{}", self.url, self.content)
    }

    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}
