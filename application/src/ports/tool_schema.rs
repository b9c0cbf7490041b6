//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for a
//! tool-calling runtime" (infrastructure).

use scout_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to JSON Schema array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
