//! Application layer for support-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{FetchSettings, RetrievalConfig, SearchSettings, SupportSettings};
pub use ports::{
    article_source::ArticleSourcePort,
    progress::{NoProgress, ProgressNotifier},
    search_backend::SearchBackendPort,
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::fetch_article::{FetchArticleInput, FetchArticleUseCase};
pub use use_cases::search_articles::{SearchArticlesInput, SearchArticlesUseCase};
