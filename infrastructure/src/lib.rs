//! Infrastructure layer for support-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP search client, the article fetcher,
//! the tool executor that exposes both to an agent, and configuration
//! file loading.

pub mod config;
pub mod tools;
pub mod web;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSources, FileConfig, FileFetchConfig, FileOutputConfig, FileSearchConfig,
    FileSupportConfig,
};
pub use tools::{
    HttpSupportToolExecutor, JsonSchemaToolConverter, SupportToolExecutor, support_tool_spec,
};
pub use web::{CredentialSource, HttpArticleFetcher, TavilySearchClient};
