//! Tool domain value objects: immutable result and error types
//!
//! These types form the **output side** of the tool boundary. Every tool
//! invocation produces a [`ToolResult`]; none of them escapes as a panic or
//! an `Err`, because the calling agent can only consume text.

use crate::core::error::RetrievalError;
use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/wrong parameters; the model can fix |
/// | `NOT_FOUND` | Unknown tool name |
/// | `CONFIGURATION_ERROR` | Missing credential or broken settings |
/// | `BACKEND_ERROR` | Upstream returned an error status or bad body |
/// | `NETWORK_ERROR` / `TIMEOUT` | Transport failure |
/// | `CANCELLED` | The call was abandoned |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "BACKEND_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl From<&RetrievalError> for ToolError {
    fn from(err: &RetrievalError) -> Self {
        let error = Self::new(err.kind().code(), err.to_string());
        match err.status() {
            Some(status) => error.with_details(format!("HTTP status {}", status)),
            None => error,
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution.
///
/// `output` holds the text handed back to the agent. On success it is the
/// payload; on failure it may hold a tool-specific rendering of the error
/// (e.g. a JSON error object), in which case [`render`](Self::render)
/// prefers it over the generic error display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Text for the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
///
/// | Tool | `duration_ms` | `bytes` | `match_count` |
/// |------|:---:|:---:|:---:|
/// | `search_support_articles` | yes | - | yes |
/// | `get_article_content` | yes | yes | - |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of bytes returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// For search operations: number of articles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Attach agent-facing text (also used for failures)
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_bytes(mut self, bytes: usize) -> Self {
        self.metadata.bytes = Some(bytes);
        self
    }

    pub fn with_match_count(mut self, count: usize) -> Self {
        self.metadata.match_count = Some(count);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Text returned to the agent. Never empty-handed: falls back to the
    /// error display when no output was attached.
    pub fn render(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) => output.clone(),
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error() {
        let err = ToolError::not_found("fetch_everything").with_details("Unknown tool");

        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.message.contains("fetch_everything"));
        assert_eq!(err.to_string(), "[NOT_FOUND] Resource not found: fetch_everything (Unknown tool)");
    }

    #[test]
    fn test_tool_error_from_retrieval_error() {
        let err = ToolError::from(&RetrievalError::BackendStatus {
            status: 503,
            message: "Service Unavailable".into(),
        });
        assert_eq!(err.code, "BACKEND_ERROR");
        assert_eq!(err.details.as_deref(), Some("HTTP status 503"));

        let err = ToolError::from(&RetrievalError::Cancelled);
        assert_eq!(err.code, "CANCELLED");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("search_support_articles", "{}")
            .with_duration(12)
            .with_match_count(3);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("{}"));
        assert!(result.error().is_none());
        assert_eq!(result.metadata.match_count, Some(3));
        assert_eq!(result.render(), "{}");
    }

    #[test]
    fn test_failure_renders_attached_output() {
        let result = ToolResult::failure(
            "get_article_content",
            ToolError::invalid_argument("bad id"),
        )
        .with_output("Error: bad id");

        assert!(!result.is_success());
        assert_eq!(result.render(), "Error: bad id");
    }

    #[test]
    fn test_failure_without_output_renders_error() {
        let result = ToolResult::failure("x", ToolError::not_found("x"));
        assert_eq!(result.render(), "Error: [NOT_FOUND] Resource not found: x");
    }
}
