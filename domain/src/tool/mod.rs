//! Tool domain module
//!
//! Defines how the search and fetch operations are presented to a
//! tool-calling agent. Every tool is described by a [`ToolDefinition`],
//! invoked via a [`ToolCall`], and answered with a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (text + meta)│
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        ├─ aliases: "search" → "search_support_articles"
//!        └─ tools:   "get_article_content" → ToolDefinition
//! ```
//!
//! # Tool Name Aliases
//!
//! Models frequently guess tool names (`search`, `web_fetch`, …). The alias
//! table in [`ToolSpec`] resolves those without another model round-trip:
//!
//! - [`ToolSpec::resolve_alias`]: alias → canonical name (aliases only)
//! - [`ToolSpec::resolve`]: any name (canonical or alias)
//! - [`ToolSpec::get_resolved`]: definition by canonical or alias name
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`SupportToolExecutor`): dispatch to the use cases

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
