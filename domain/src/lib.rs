//! Domain layer for support-scout
//!
//! This crate contains the core types of the retrieval tool layer. It has
//! no dependencies on HTTP, configuration files, or terminals.
//!
//! # Core Concepts
//!
//! - **Search**: a validated [`SearchQuery`] goes to a backend, the raw
//!   [`SearchResult`]s come back, and [`ResultFormatter`] shapes them into a
//!   [`SearchEnvelope`] the agent can parse.
//! - **Article**: an [`ArticleRequest`] validates a URL surfaced by a search;
//!   the fetched body becomes a truncated, framed [`ArticleContent`].
//! - **Tool**: the agent-facing surface: [`ToolSpec`], [`ToolCall`],
//!   [`ToolResult`].

pub mod article;
pub mod config;
pub mod core;
pub mod search;
pub mod tool;

// Re-export commonly used types
pub use article::{ArticleContent, ArticleRequest, DEFAULT_MAX_CHARS, MAX_ARTICLE_CHARS};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::{ErrorKind, RetrievalError};
pub use search::{
    ArticleSummary, DomainFilter, MAX_RESULTS_LIMIT, ResultFormatter, ResultLimit, SearchDepth,
    SearchEnvelope, SearchFailure, SearchQuery, SearchResult,
};
pub use tool::{
    DefaultToolValidator, ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult,
    ToolResultMetadata, ToolSpec, ToolValidator,
};
