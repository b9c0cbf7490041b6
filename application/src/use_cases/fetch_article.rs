//! Fetch Article use case
//!
//! Validates an article identifier, dereferences it through the
//! [`ArticleSourcePort`], and truncates the body.

use crate::config::RetrievalConfig;
use crate::ports::article_source::ArticleSourcePort;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::run_cancellable;
use scout_domain::{ArticleContent, ArticleRequest, RetrievalError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Input for the FetchArticle use case
#[derive(Debug, Clone)]
pub struct FetchArticleInput {
    /// URL previously surfaced by a search
    pub article_id: String,
    /// Requested size; clamped, never rejected
    pub max_chars: Option<i64>,
}

impl FetchArticleInput {
    pub fn new(article_id: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            max_chars: None,
        }
    }

    pub fn with_max_chars(mut self, max_chars: i64) -> Self {
        self.max_chars = Some(max_chars);
        self
    }
}

/// Use case for fetching one article's content
pub struct FetchArticleUseCase<S: ArticleSourcePort + 'static> {
    source: Arc<S>,
    config: RetrievalConfig,
    cancellation_token: Option<CancellationToken>,
}

impl<S: ArticleSourcePort + 'static> FetchArticleUseCase<S> {
    pub fn new(source: Arc<S>, config: RetrievalConfig) -> Self {
        Self {
            source,
            config,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub async fn execute(&self, input: FetchArticleInput) -> Result<ArticleContent, RetrievalError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Validation happens before anything touches the network.
    pub async fn execute_with_progress(
        &self,
        input: FetchArticleInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ArticleContent, RetrievalError> {
        let requested = input
            .max_chars
            .unwrap_or(self.config.support.default_max_chars as i64);
        let request = ArticleRequest::parse(
            &input.article_id,
            requested,
            self.config.fetch.max_chars_limit,
        )?;

        debug!(
            "Fetching {} (max_chars={})",
            request.url(),
            request.max_chars()
        );

        progress.on_request_start("fetch", request.url());
        let result = run_cancellable(
            &self.cancellation_token,
            self.source.fetch_body(request.url(), request.max_chars()),
        )
        .await;
        progress.on_request_complete("fetch", result.is_ok());
        let body = result?;

        let article = ArticleContent::truncate(request.url(), &body, request.max_chars());
        info!(
            "Fetched {} ({} chars, truncated={})",
            article.url, article.original_chars, article.truncated
        );
        Ok(article)
    }
}
