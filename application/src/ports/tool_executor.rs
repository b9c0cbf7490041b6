//! Tool Executor port
//!
//! Defines the interface for executing the agent-facing tools.

use async_trait::async_trait;
use scout_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how a tool-calling runtime invokes the retrieval
/// operations. Implementations (adapters) live in the infrastructure layer.
///
/// `execute` is infallible by signature: every outcome, including unknown
/// tools and transport failures, comes back as a [`ToolResult`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available (canonical name or alias)
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get_resolved(name).is_some()
    }

    /// Get the definition of a specific tool (canonical name or alias)
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get_resolved(name)
    }

    /// Get canonical names of all available tools, sorted
    fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tool_spec().names().collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call asynchronously
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
