//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Strings that name enum values stay strings here and are parsed with a
//! fallback, so a typo degrades to a warning instead of a load failure.

mod fetch;
mod output;
mod search;
mod support;

pub use fetch::FileFetchConfig;
pub use output::FileOutputConfig;
pub use search::FileSearchConfig;
pub use support::FileSupportConfig;

use scout_application::RetrievalConfig;
use scout_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Search backend settings
    pub search: FileSearchConfig,
    /// Support tool settings
    pub support: FileSupportConfig,
    /// Article fetch settings
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Only [`Severity::Error`](scout_domain::Severity::Error) issues make the
    /// configuration unusable; warnings describe values that get clamped or
    /// replaced by a default in [`to_retrieval_config`](Self::to_retrieval_config).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.search.validate());
        issues.extend(self.support.validate());
        issues.extend(self.fetch.validate());
        issues
    }

    /// Convert into the settings every component receives at construction
    pub fn to_retrieval_config(&self) -> RetrievalConfig {
        RetrievalConfig {
            search: self.search.to_settings(),
            support: self.support.to_settings(),
            fetch: self.fetch.to_settings(),
        }
    }
}

/// Warn about a count that is zero or above its ceiling.
fn check_count(field: &str, value: u64, limit: u64) -> Vec<ConfigIssue> {
    if value == 0 {
        vec![ConfigIssue::warning(
            ConfigIssueCode::ZeroLimit {
                field: field.to_string(),
            },
            format!("{}: 0 is not allowed, using 1", field),
        )]
    } else if value > limit {
        vec![ConfigIssue::warning(
            ConfigIssueCode::DefaultExceedsLimit {
                field: field.to_string(),
                value,
                limit,
            },
            format!("{}: {} exceeds the limit of {}, clamping", field, value, limit),
        )]
    } else {
        vec![]
    }
}

/// A zero timeout would fail every request.
fn check_timeout(field: &str, secs: u64) -> Vec<ConfigIssue> {
    if secs == 0 {
        vec![ConfigIssue::error(
            ConfigIssueCode::ZeroLimit {
                field: field.to_string(),
            },
            format!("{} must be at least 1 second", field),
        )]
    } else {
        vec![]
    }
}
