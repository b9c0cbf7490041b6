//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod article_source;
pub mod progress;
pub mod search_backend;
pub mod tool_executor;
pub mod tool_schema;
