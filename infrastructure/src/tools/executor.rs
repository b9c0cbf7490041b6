//! Support tool executor, the concrete implementation of [`ToolExecutorPort`].
//!
//! [`SupportToolExecutor`] is the agent-facing boundary: it resolves tool
//! names (including aliases), validates arguments against the definitions,
//! and dispatches to the search and fetch use cases.
//!
//! # Execution Path
//!
//! ```text
//! ToolExecutorPort::execute(call)
//!   ├─ unknown name            → NOT_FOUND
//!   ├─ validator rejects args  → INVALID_ARGUMENT (tool-shaped text)
//!   ├─ search_support_articles → SearchArticlesUseCase
//!   └─ get_article_content     → FetchArticleUseCase
//! ```
//!
//! Every path ends in a [`ToolResult`]; nothing panics and nothing returns
//! `Err` past this point.

use super::support::{self, GET_ARTICLE_CONTENT, SEARCH_SUPPORT_ARTICLES};
use crate::web::{HttpArticleFetcher, TavilySearchClient};
use async_trait::async_trait;
use scout_application::RetrievalConfig;
use scout_application::ports::article_source::ArticleSourcePort;
use scout_application::ports::search_backend::SearchBackendPort;
use scout_application::ports::tool_executor::ToolExecutorPort;
use scout_application::use_cases::fetch_article::FetchArticleUseCase;
use scout_application::use_cases::search_articles::SearchArticlesUseCase;
use scout_domain::RetrievalError;
use scout_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Executor over the real HTTP adapters
pub type HttpSupportToolExecutor = SupportToolExecutor<TavilySearchClient, HttpArticleFetcher>;

/// Executor for the support-article tools.
///
/// Generic over the two ports so tests can substitute fakes; production
/// code uses [`HttpSupportToolExecutor`].
pub struct SupportToolExecutor<B, S>
where
    B: SearchBackendPort + 'static,
    S: ArticleSourcePort + 'static,
{
    tool_spec: ToolSpec,
    search: SearchArticlesUseCase<B>,
    fetch: FetchArticleUseCase<S>,
    validator: DefaultToolValidator,
}

impl<B, S> SupportToolExecutor<B, S>
where
    B: SearchBackendPort + 'static,
    S: ArticleSourcePort + 'static,
{
    pub fn new(backend: Arc<B>, source: Arc<S>, config: RetrievalConfig) -> Self {
        Self {
            tool_spec: super::support_tool_spec(&config),
            search: SearchArticlesUseCase::new(backend, config.clone()),
            fetch: FetchArticleUseCase::new(source, config),
            validator: DefaultToolValidator,
        }
    }

    /// Abandon outstanding calls when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.search = self.search.with_cancellation(token.clone());
        self.fetch = self.fetch.with_cancellation(token);
        self
    }
}

impl HttpSupportToolExecutor {
    /// Build the HTTP adapters from `config` and wire them in.
    pub fn from_config(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let backend = Arc::new(TavilySearchClient::new(&config.search)?);
        let source = Arc::new(HttpArticleFetcher::new(&config.fetch)?);
        Ok(Self::new(backend, source, config.clone()))
    }
}

#[async_trait]
impl<B, S> ToolExecutorPort for SupportToolExecutor<B, S>
where
    B: SearchBackendPort + 'static,
    S: ArticleSourcePort + 'static,
{
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get_resolved(&call.tool_name) else {
            warn!("Unknown tool requested: {}", call.tool_name);
            return ToolResult::failure(
                call.tool_name.as_str(),
                ToolError::not_found(call.tool_name.as_str()).with_details(format!(
                    "Available tools: {}",
                    self.available_tools().join(", ")
                )),
            );
        };
        let canonical = definition.name.as_str();
        if canonical != call.tool_name {
            debug!("Resolved tool alias '{}' -> '{}'", call.tool_name, canonical);
        }

        if let Err(message) = self.validator.validate(call, definition) {
            warn!("Rejected call to {}: {}", canonical, message);
            return support::invalid_call(canonical, call, message);
        }

        match canonical {
            SEARCH_SUPPORT_ARTICLES => support::execute_search(&self.search, call).await,
            GET_ARTICLE_CONTENT => support::execute_fetch(&self.fetch, call).await,
            other => ToolResult::failure(
                other,
                ToolError::internal(format!("No handler registered for tool '{}'", other)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{SearchQuery, SearchResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct FakeBackend {
        response: Result<Vec<SearchResult>, RetrievalError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SearchBackendPort for FakeBackend {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<SearchResult>, RetrievalError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    struct FakeSource {
        response: Result<String, RetrievalError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ArticleSourcePort for FakeSource {
        async fn fetch_body(
            &self,
            _url: &str,
            _max_chars: usize,
        ) -> Result<String, RetrievalError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    struct Harness {
        backend: Arc<FakeBackend>,
        source: Arc<FakeSource>,
        executor: SupportToolExecutor<FakeBackend, FakeSource>,
    }

    fn harness(
        search: Result<Vec<SearchResult>, RetrievalError>,
        fetch: Result<String, RetrievalError>,
    ) -> Harness {
        let backend = Arc::new(FakeBackend {
            response: search,
            calls: AtomicUsize::new(0),
        });
        let source = Arc::new(FakeSource {
            response: fetch,
            calls: AtomicUsize::new(0),
        });
        let executor = SupportToolExecutor::new(
            Arc::clone(&backend),
            Arc::clone(&source),
            RetrievalConfig::default(),
        );
        Harness {
            backend,
            source,
            executor,
        }
    }

    fn three_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new("https://support.langchain.com/a", Some("A".into()), "a"),
            SearchResult::new("", Some("B".into()), "b"),
            SearchResult::new("https://support.langchain.com/c", Some("C".into()), "c"),
        ]
    }

    fn parse(result: &ToolResult) -> serde_json::Value {
        serde_json::from_str(&result.render()).unwrap()
    }

    // ==================== Spec & Aliases ====================

    #[test]
    fn test_tool_spec() {
        let h = harness(Ok(vec![]), Ok(String::new()));
        assert_eq!(
            h.executor.available_tools(),
            vec![GET_ARTICLE_CONTENT, SEARCH_SUPPORT_ARTICLES]
        );
        assert!(h.executor.has_tool("web_search"));
        assert!(h.executor.has_tool("fetch"));
        assert!(!h.executor.has_tool("run_command"));
        assert_eq!(
            h.executor.get_tool("get_article").unwrap().name,
            GET_ARTICLE_CONTENT
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let h = harness(Ok(vec![]), Ok(String::new()));
        let result = h.executor.execute(&ToolCall::new("delete_everything")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(result.render().starts_with("Error: [NOT_FOUND]"));
    }

    // ==================== Search Tool ====================

    #[tokio::test]
    async fn test_search_returns_envelope_json() {
        let h = harness(Ok(three_results()), Ok(String::new()));
        let call = ToolCall::new(SEARCH_SUPPORT_ARTICLES)
            .with_arg("query", "rate limit error")
            .with_arg("max_results", 5);

        let result = h.executor.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.metadata.match_count, Some(2));
        assert!(result.metadata.duration_ms.is_some());

        let json = parse(&result);
        assert_eq!(json["query"], "rate limit error");
        assert_eq!(json["total"], 2);
        assert_eq!(json["articles"][0]["id"], "https://support.langchain.com/a");
        assert_eq!(json["articles"][1]["source"], "support.langchain.com");
        assert!(json["note"].as_str().unwrap().contains(GET_ARTICLE_CONTENT));
        assert!(result.render().contains("\n  \"query\""));
    }

    #[tokio::test]
    async fn test_search_alias_and_loose_numbers() {
        let h = harness(Ok(vec![]), Ok(String::new()));
        for max_results in [serde_json::json!("3"), serde_json::json!(2.7), serde_json::json!("many")] {
            let call = ToolCall::new("search")
                .with_arg("query", "q")
                .with_arg("max_results", max_results);
            let result = h.executor.execute(&call).await;
            assert!(result.is_success());
            assert_eq!(result.tool_name, SEARCH_SUPPORT_ARTICLES);
        }
        assert_eq!(h.backend.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_backend_call() {
        let h = harness(Ok(three_results()), Ok(String::new()));
        let call = ToolCall::new(SEARCH_SUPPORT_ARTICLES).with_arg("query", "   ");

        let result = h.executor.execute(&call).await;

        assert!(result.is_success());
        let json = parse(&result);
        assert_eq!(json["total"], 0);
        assert_eq!(json["note"], "No results found.");
        assert_eq!(h.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_failure_is_json_with_query() {
        let h = harness(
            Err(RetrievalError::Configuration(
                "TAVILY_API_KEY not found in environment".into(),
            )),
            Ok(String::new()),
        );
        let call = ToolCall::new(SEARCH_SUPPORT_ARTICLES).with_arg("query", "streaming");

        let result = h.executor.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "CONFIGURATION_ERROR");
        let json = parse(&result);
        assert_eq!(json["query"], "streaming");
        assert_eq!(json["kind"], "configuration");
        assert!(json["error"].as_str().unwrap().contains("TAVILY_API_KEY"));
    }

    #[tokio::test]
    async fn test_search_missing_query_is_invalid_argument() {
        let h = harness(Ok(vec![]), Ok(String::new()));
        let result = h
            .executor
            .execute(&ToolCall::new(SEARCH_SUPPORT_ARTICLES).with_arg("max_results", 3))
            .await;

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert_eq!(parse(&result)["query"], "");
        assert_eq!(h.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_non_string_query_is_invalid_argument() {
        let h = harness(Ok(three_results()), Ok(String::new()));
        let call = ToolCall::new(SEARCH_SUPPORT_ARTICLES).with_arg("query", 42);

        let result = h.executor.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        let json = parse(&result);
        assert_eq!(json["kind"], "validation");
        assert_eq!(json["query"], "42");
        assert!(json["error"].as_str().unwrap().contains("must be a string, got number"));
        assert_eq!(h.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_non_string_article_id_is_invalid_argument() {
        let h = harness(Ok(vec![]), Ok("never".into()));
        let call = ToolCall::new(GET_ARTICLE_CONTENT).with_arg("article_id", 123);

        let result = h.executor.execute(&call).await;

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert_eq!(
            result.render(),
            "Error: Parameter 'article_id' for tool 'get_article_content' must be a string, got number"
        );
        assert_eq!(h.source.calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Fetch Tool ====================

    #[tokio::test]
    async fn test_fetch_returns_framed_text() {
        let h = harness(Ok(vec![]), Ok("b".repeat(1000)));
        let call = ToolCall::new("web_fetch")
            .with_arg("article_id", "https://support.langchain.com/a")
            .with_arg("max_chars", 10);

        let result = h.executor.execute(&call).await;

        assert!(result.is_success());
        let expected = format!("URL: https://support.langchain.com/a\n\nContent:\n{}", "b".repeat(10));
        assert_eq!(result.render(), expected);
        assert_eq!(result.metadata.bytes, Some(expected.len()));
    }

    #[tokio::test]
    async fn test_fetch_zero_max_chars_returns_frame_only() {
        let h = harness(Ok(vec![]), Ok("body text".into()));
        let call = ToolCall::new(GET_ARTICLE_CONTENT)
            .with_arg("article_id", "https://support.langchain.com/a")
            .with_arg("max_chars", 0);

        let result = h.executor.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.render(), "URL: https://support.langchain.com/a\n\nContent:\n");
    }

    #[tokio::test]
    async fn test_fetch_non_url_fails_without_network() {
        let h = harness(Ok(vec![]), Ok("never".into()));
        let call = ToolCall::new(GET_ARTICLE_CONTENT).with_arg("article_id", "not-a-url");

        let result = h.executor.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(result.render().starts_with("Error: article_id must be an http(s) URL"));
        assert_eq!(h.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_backend_failure_text() {
        let h = harness(
            Ok(vec![]),
            Err(RetrievalError::BackendStatus {
                status: 404,
                message: "Not Found".into(),
            }),
        );
        let call = ToolCall::new(GET_ARTICLE_CONTENT).with_arg("article_id", "https://e.com/x");

        let result = h.executor.execute(&call).await;

        assert_eq!(
            result.render(),
            "Error fetching article: Backend returned HTTP 404: Not Found"
        );
        let error = result.error().unwrap();
        assert_eq!(error.code, "BACKEND_ERROR");
        assert_eq!(error.details.as_deref(), Some("HTTP status 404"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_parameter_rejected() {
        let h = harness(Ok(vec![]), Ok(String::new()));
        let call = ToolCall::new(GET_ARTICLE_CONTENT)
            .with_arg("article_id", "https://e.com")
            .with_arg("format", "markdown");

        let result = h.executor.execute(&call).await;
        assert_eq!(result.render(), "Error: Unknown parameter 'format' for tool 'get_article_content'");
    }

    // ==================== Cancellation ====================

    #[tokio::test]
    async fn test_cancelled_executor_reports_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let h = harness(Ok(three_results()), Ok(String::new()));
        let executor = h.executor.with_cancellation(token);

        let result = executor
            .execute(&ToolCall::new(SEARCH_SUPPORT_ARTICLES).with_arg("query", "q"))
            .await;

        assert_eq!(result.error().unwrap().code, "CANCELLED");
        assert_eq!(parse(&result)["kind"], "cancelled");
        assert_eq!(h.backend.calls.load(Ordering::SeqCst), 0);
    }
}
