//! Search Articles use case
//!
//! Normalizes an agent's search request against the configured defaults,
//! sends it to the backend, and shapes whatever comes back into a
//! [`SearchEnvelope`].
//!
//! # Scope
//!
//! | `domains` | Filter | Default count | Ceiling |
//! |-----------|--------|---------------|---------|
//! | `None` | configured support domain | `support.default_max_results` | `support_results_ceiling()` |
//! | `Some(list)` | `list` (empty = unrestricted) | `search.default_max_results` | `search_results_ceiling()` |

use crate::config::RetrievalConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::search_backend::SearchBackendPort;
use crate::use_cases::shared::run_cancellable;
use scout_domain::{
    DomainFilter, ResultFormatter, ResultLimit, RetrievalError, SearchDepth, SearchEnvelope,
    SearchQuery,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Input for the SearchArticles use case
#[derive(Debug, Clone)]
pub struct SearchArticlesInput {
    /// Raw query text from the caller
    pub query: String,
    /// Requested result count; clamped, never rejected
    pub max_results: Option<i64>,
    /// Domain restriction. `None` means the configured support domain.
    pub domains: Option<Vec<String>>,
    /// Overrides the configured depth
    pub depth: Option<SearchDepth>,
    /// Overrides the configured raw-content flag
    pub include_raw_content: Option<bool>,
}

impl SearchArticlesInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: None,
            domains: None,
            depth: None,
            include_raw_content: None,
        }
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Restrict to the given hosts instead of the support domain
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Search without any domain restriction
    pub fn unrestricted(mut self) -> Self {
        self.domains = Some(Vec::new());
        self
    }

    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_raw_content(mut self, include: bool) -> Self {
        self.include_raw_content = Some(include);
        self
    }
}

/// Use case for searching support articles
pub struct SearchArticlesUseCase<B: SearchBackendPort + 'static> {
    backend: Arc<B>,
    config: RetrievalConfig,
    cancellation_token: Option<CancellationToken>,
}

impl<B: SearchBackendPort + 'static> SearchArticlesUseCase<B> {
    pub fn new(backend: Arc<B>, config: RetrievalConfig) -> Self {
        Self {
            backend,
            config,
            cancellation_token: None,
        }
    }

    /// Abandon the outstanding backend call when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: SearchArticlesInput,
    ) -> Result<SearchEnvelope, RetrievalError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SearchArticlesInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<SearchEnvelope, RetrievalError> {
        let query = match SearchQuery::new(&input.query) {
            Ok(query) => query,
            Err(_) => {
                debug!("Blank search query, skipping backend call");
                return Ok(ResultFormatter::empty(&input.query));
            }
        };
        let query = self.build_query(query, &input);
        let source = query.domain_filter().label();

        debug!(
            "Searching '{}' (limit={}, depth={}, domains={})",
            query.text(),
            query.limit().get(),
            query.depth(),
            source.as_deref().unwrap_or("*")
        );

        progress.on_request_start("search", query.text());
        let result = run_cancellable(&self.cancellation_token, self.backend.search(&query)).await;
        progress.on_request_complete("search", result.is_ok());
        let results = result?;

        let envelope = ResultFormatter::format(&results, &input.query, source.as_deref());
        info!(
            "Search '{}' returned {} results ({} referenceable)",
            query.text(),
            results.len(),
            envelope.total()
        );
        Ok(envelope)
    }

    /// Apply scope, defaults and clamping to a validated query
    fn build_query(&self, query: SearchQuery, input: &SearchArticlesInput) -> SearchQuery {
        let (filter, default_count, ceiling) = match &input.domains {
            None => (
                DomainFilter::new([self.config.support.domain.as_str()]),
                self.config.support.default_max_results,
                self.config.support_results_ceiling(),
            ),
            Some(domains) => (
                DomainFilter::new(domains),
                self.config.search.default_max_results,
                self.config.search_results_ceiling(),
            ),
        };

        let requested = input
            .max_results
            .unwrap_or_else(|| i64::from(default_count));

        query
            .with_limit(ResultLimit::clamped(requested, ceiling))
            .with_domains(filter)
            .with_depth(input.depth.unwrap_or(self.config.search.depth))
            .with_raw_content(
                input
                    .include_raw_content
                    .unwrap_or(self.config.search.include_raw_content),
            )
    }
}
