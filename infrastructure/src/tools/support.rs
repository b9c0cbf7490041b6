//! `search_support_articles` and `get_article_content`
//!
//! Definitions plus the handlers that turn a [`ToolCall`] into a use case
//! input and the use case outcome into agent-facing text.
//!
//! # Output
//!
//! | Tool | Success | Failure |
//! |------|---------|---------|
//! | `search_support_articles` | envelope JSON | `{"error", "kind", "query"}` JSON |
//! | `get_article_content` | `URL: …\n\nContent:\n…` | `Error: …` / `Error fetching article: …` |
//!
//! Both are 2-space indented JSON or plain text; nothing here returns `Err`.

use scout_application::RetrievalConfig;
use scout_application::ports::article_source::ArticleSourcePort;
use scout_application::ports::search_backend::SearchBackendPort;
use scout_application::use_cases::fetch_article::{FetchArticleInput, FetchArticleUseCase};
use scout_application::use_cases::search_articles::{SearchArticlesInput, SearchArticlesUseCase};
use scout_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use scout_domain::{RetrievalError, SearchEnvelope, SearchFailure};
use std::time::Instant;
use tracing::warn;

/// Canonical name of the search tool.
pub const SEARCH_SUPPORT_ARTICLES: &str = "search_support_articles";

/// Canonical name of the fetch tool.
pub const GET_ARTICLE_CONTENT: &str = "get_article_content";

pub fn search_support_articles_definition(config: &RetrievalConfig) -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_SUPPORT_ARTICLES,
        format!(
            "Search the public support site ({}). Returns JSON with article IDs (URLs), \
             titles, snippets and URLs.",
            config.support.domain
        ),
    )
    .with_parameter(
        ToolParameter::new(
            "query",
            "Search query string (error message, feature, or product name)",
            true,
        )
        .with_type("string"),
    )
    .with_parameter(
        ToolParameter::new(
            "max_results",
            format!(
                "Number of results to return (default: {}, max: {})",
                config.support.default_max_results,
                config.support_results_ceiling()
            ),
            false,
        )
        .with_type("integer")
        .with_minimum(1),
    )
}

pub fn get_article_content_definition(config: &RetrievalConfig) -> ToolDefinition {
    ToolDefinition::new(
        GET_ARTICLE_CONTENT,
        format!(
            "Fetch the full content of a support article by URL. Returns the raw page text \
             prefixed with its URL. Use an article ID returned by {}.",
            SEARCH_SUPPORT_ARTICLES
        ),
    )
    .with_parameter(
        ToolParameter::new(
            "article_id",
            format!("The article URL returned by {}", SEARCH_SUPPORT_ARTICLES),
            true,
        )
        .with_type("string"),
    )
    .with_parameter(
        ToolParameter::new(
            "max_chars",
            format!(
                "Maximum characters of content to return (default: {})",
                config.support.default_max_chars
            ),
            false,
        )
        .with_type("integer")
        .with_minimum(0),
    )
}

// ==================== Handlers ====================

/// Run the search tool.
pub async fn execute_search<B: SearchBackendPort + 'static>(
    use_case: &SearchArticlesUseCase<B>,
    call: &ToolCall,
) -> ToolResult {
    let start = Instant::now();
    let query = call.get_string("query").unwrap_or_default().to_string();

    let mut input = SearchArticlesInput::new(query.clone());
    if let Some(max_results) = call.get_integer("max_results") {
        input = input.with_max_results(max_results);
    }

    let outcome = match use_case.execute(input).await {
        Ok(envelope) => render_envelope(&envelope),
        Err(err) => Err(err),
    };
    let elapsed = start.elapsed().as_millis() as u64;

    match outcome {
        Ok((json, total)) => ToolResult::success(SEARCH_SUPPORT_ARTICLES, json)
            .with_duration(elapsed)
            .with_match_count(total),
        Err(err) => {
            warn!("Support search failed: {}", err);
            search_failure(&query, &err).with_duration(elapsed)
        }
    }
}

/// Run the fetch tool.
pub async fn execute_fetch<S: ArticleSourcePort + 'static>(
    use_case: &FetchArticleUseCase<S>,
    call: &ToolCall,
) -> ToolResult {
    let start = Instant::now();
    let article_id = call.get_string("article_id").unwrap_or_default();

    let mut input = FetchArticleInput::new(article_id);
    if let Some(max_chars) = call.get_integer("max_chars") {
        input = input.with_max_chars(max_chars);
    }

    let outcome = use_case.execute(input).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(article) => {
            let text = article.framed();
            let bytes = text.len();
            ToolResult::success(GET_ARTICLE_CONTENT, text)
                .with_duration(elapsed)
                .with_bytes(bytes)
        }
        Err(err) => {
            warn!("Failed to fetch support article {}: {}", article_id.trim(), err);
            fetch_failure(&err).with_duration(elapsed)
        }
    }
}

/// Failure result for a call that did not pass schema validation, shaped
/// like the tool's own failures.
pub fn invalid_call(tool_name: &str, call: &ToolCall, message: String) -> ToolResult {
    let err = RetrievalError::Validation(message);
    if tool_name == SEARCH_SUPPORT_ARTICLES {
        let query = match call.arguments.get("query") {
            Some(serde_json::Value::String(query)) => query.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        search_failure(&query, &err)
    } else if tool_name == GET_ARTICLE_CONTENT {
        fetch_failure(&err)
    } else {
        ToolResult::failure(tool_name, ToolError::from(&err))
    }
}

fn render_envelope(envelope: &SearchEnvelope) -> Result<(String, usize), RetrievalError> {
    envelope
        .to_json_pretty()
        .map(|json| (json, envelope.total()))
        .map_err(|e| RetrievalError::Backend(format!("Failed to encode search results: {}", e)))
}

fn search_failure(query: &str, err: &RetrievalError) -> ToolResult {
    let failure = SearchFailure::new(query, err);
    let text = failure.to_json_pretty().unwrap_or_else(|_| format!("Error: {}", err));
    ToolResult::failure(SEARCH_SUPPORT_ARTICLES, ToolError::from(err)).with_output(text)
}

fn fetch_failure(err: &RetrievalError) -> ToolResult {
    let text = match err {
        RetrievalError::Validation(message) => format!("Error: {}", message),
        other => format!("Error fetching article: {}", other),
    };
    ToolResult::failure(GET_ARTICLE_CONTENT, ToolError::from(err)).with_output(text)
}
