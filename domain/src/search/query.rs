//! Search query value objects
//!
//! A [`SearchQuery`] is only constructible from non-blank text. Numeric
//! knobs are clamped rather than rejected: agents pass loosely reasoned
//! numbers and a clamped request is more useful to them than an error.

use crate::core::error::RetrievalError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Hard ceiling on results per request, imposed by the backend.
pub const MAX_RESULTS_LIMIT: u32 = 20;

/// Result count used when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Backend search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["basic", "advanced"]
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(SearchDepth::Basic),
            "advanced" => Ok(SearchDepth::Advanced),
            other => Err(format!(
                "Unknown search depth '{}' (expected one of: {})",
                other,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// Number of results to request, always within `[1, MAX_RESULTS_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLimit(u32);

impl ResultLimit {
    /// Clamp `requested` into `[1, ceiling]`, where `ceiling` is itself
    /// bounded by [`MAX_RESULTS_LIMIT`].
    pub fn clamped(requested: i64, ceiling: u32) -> Self {
        let ceiling = ceiling.clamp(1, MAX_RESULTS_LIMIT);
        Self(requested.clamp(1, i64::from(ceiling)) as u32)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_RESULTS)
    }
}

/// Hosts the backend should restrict results to.
///
/// Entries are trimmed, blanks are dropped, and iteration order is sorted
/// so that identical filters always produce identical requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainFilter(BTreeSet<String>);

impl DomainFilter {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        )
    }

    /// No restriction
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// Label attached to articles as their `source`, if a filter is active.
    pub fn label(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.to_vec().join(","))
        }
    }
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
    limit: ResultLimit,
    domain_filter: DomainFilter,
    depth: SearchDepth,
    include_raw_content: bool,
}

impl SearchQuery {
    /// Create a query from caller text.
    ///
    /// Fails with [`RetrievalError::Validation`] if the text is empty after
    /// trimming. Callers treat that as "no results", not as a backend fault.
    pub fn new(text: impl AsRef<str>) -> Result<Self, RetrievalError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(RetrievalError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            text: text.to_string(),
            limit: ResultLimit::default(),
            domain_filter: DomainFilter::unrestricted(),
            depth: SearchDepth::default(),
            include_raw_content: false,
        })
    }

    pub fn with_limit(mut self, limit: ResultLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_domains(mut self, filter: DomainFilter) -> Self {
        self.domain_filter = filter;
        self
    }

    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_raw_content(mut self, include: bool) -> Self {
        self.include_raw_content = include;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> ResultLimit {
        self.limit
    }

    pub fn domain_filter(&self) -> &DomainFilter {
        &self.domain_filter
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    pub fn include_raw_content(&self) -> bool {
        self.include_raw_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SearchQuery ====================

    #[test]
    fn test_query_is_trimmed() {
        let query = SearchQuery::new("  rate limit error \n").unwrap();
        assert_eq!(query.text(), "rate limit error");
        assert_eq!(query.limit().get(), DEFAULT_MAX_RESULTS);
        assert_eq!(query.depth(), SearchDepth::Basic);
        assert!(!query.include_raw_content());
        assert!(query.domain_filter().is_empty());
    }

    #[test]
    fn test_blank_query_is_validation_error() {
        for text in ["", "   ", "\t\n"] {
            let err = SearchQuery::new(text).unwrap_err();
            assert!(matches!(err, RetrievalError::Validation(_)));
        }
    }

    // ==================== ResultLimit ====================

    #[test]
    fn test_limit_clamps_low_values_to_one() {
        assert_eq!(ResultLimit::clamped(0, MAX_RESULTS_LIMIT).get(), 1);
        assert_eq!(ResultLimit::clamped(-3, MAX_RESULTS_LIMIT).get(), 1);
        assert_eq!(ResultLimit::clamped(i64::MIN, MAX_RESULTS_LIMIT).get(), 1);
    }

    #[test]
    fn test_limit_clamps_high_values_to_ceiling() {
        assert_eq!(ResultLimit::clamped(999, MAX_RESULTS_LIMIT).get(), MAX_RESULTS_LIMIT);
        assert_eq!(ResultLimit::clamped(i64::MAX, 10).get(), 10);
        assert_eq!(ResultLimit::clamped(7, 10).get(), 7);
    }

    #[test]
    fn test_limit_ceiling_is_bounded_by_backend_limit() {
        assert_eq!(ResultLimit::clamped(500, 1000).get(), MAX_RESULTS_LIMIT);
        assert_eq!(ResultLimit::clamped(5, 0).get(), 1);
    }

    #[test]
    fn test_limit_always_in_range() {
        for requested in [-1000, -1, 0, 1, 5, 19, 20, 21, 1000] {
            for ceiling in [0, 1, 10, 20, 50] {
                let limit = ResultLimit::clamped(requested, ceiling).get();
                assert!((1..=MAX_RESULTS_LIMIT).contains(&limit));
            }
        }
    }

    // ==================== DomainFilter ====================

    #[test]
    fn test_domain_filter_trims_and_drops_blanks() {
        let filter = DomainFilter::new([" docs.example.com ", "", "   ", "api.example.com"]);
        assert_eq!(filter.len(), 2);
        assert_eq!(
            filter.to_vec(),
            vec!["api.example.com".to_string(), "docs.example.com".to_string()]
        );
    }

    #[test]
    fn test_domain_filter_is_deterministic() {
        let a = DomainFilter::new(["b.com", "a.com", "b.com"]);
        let b = DomainFilter::new(["a.com", "b.com"]);
        assert_eq!(a, b);
        assert_eq!(a.label(), Some("a.com,b.com".to_string()));
    }

    #[test]
    fn test_unrestricted_filter_has_no_label() {
        assert!(DomainFilter::unrestricted().label().is_none());
        assert!(DomainFilter::new(["  "]).is_empty());
    }

    // ==================== SearchDepth ====================

    #[test]
    fn test_depth_parse() {
        assert_eq!("basic".parse::<SearchDepth>().unwrap(), SearchDepth::Basic);
        assert_eq!(" Advanced ".parse::<SearchDepth>().unwrap(), SearchDepth::Advanced);
        assert!("deep".parse::<SearchDepth>().is_err());
    }

    #[test]
    fn test_depth_serializes_lowercase() {
        let json = serde_json::to_string(&SearchDepth::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
    }
}
