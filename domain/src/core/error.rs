//! Retrieval error types
//!
//! Every failure that can happen while searching or fetching is one of a
//! small set of [`ErrorKind`]s. The kind carries a stable machine-readable
//! code that survives all the way to the agent-facing tool result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable classification of a [`RetrievalError`].
///
/// | Kind | Code | Raised when |
/// |------|------|-------------|
/// | `Configuration` | `CONFIGURATION_ERROR` | Missing credential, unusable settings |
/// | `Validation` | `INVALID_ARGUMENT` | Malformed caller input, before any network call |
/// | `Backend` | `BACKEND_ERROR` | Non-2xx status or unparseable body |
/// | `Network` | `NETWORK_ERROR` | DNS, connection reset, TLS failure |
/// | `Timeout` | `TIMEOUT` | Request exceeded its time bound |
/// | `Cancelled` | `CANCELLED` | Caller abandoned the call |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Validation,
    Backend,
    Network,
    Timeout,
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Validation => "validation",
            ErrorKind::Backend => "backend",
            ErrorKind::Network => "network",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Cancelled => "cancelled",
        }
    }

    /// Error code used in tool results.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
            ErrorKind::Validation => "INVALID_ARGUMENT",
            ErrorKind::Backend => "BACKEND_ERROR",
            ErrorKind::Network => "NETWORK_ERROR",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Cancelled => "CANCELLED",
        }
    }

    /// Whether the failure happened on the wire (as opposed to before the call).
    pub fn is_transport(&self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Timeout)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by search and article retrieval
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Backend returned HTTP {status}: {message}")]
    BackendStatus { status: u16, message: String },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RetrievalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RetrievalError::Configuration(_) => ErrorKind::Configuration,
            RetrievalError::Validation(_) => ErrorKind::Validation,
            RetrievalError::BackendStatus { .. } | RetrievalError::Backend(_) => {
                ErrorKind::Backend
            }
            RetrievalError::Network(_) => ErrorKind::Network,
            RetrievalError::Timeout(_) => ErrorKind::Timeout,
            RetrievalError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// HTTP status carried by a backend failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RetrievalError::BackendStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetrievalError::Cancelled)
    }
}
