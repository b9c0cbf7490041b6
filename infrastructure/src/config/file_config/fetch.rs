//! Article fetch configuration from TOML (`[fetch]` section)

use super::{check_count, check_timeout};
use scout_application::FetchSettings;
use scout_application::config::default_user_agent;
use scout_domain::{ConfigIssue, ConfigIssueCode, MAX_ARTICLE_CHARS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// `User-Agent` header (default: "support-scout/<version>").
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Ceiling on characters per fetch (capped at 100000).
    pub max_chars_limit: usize,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: 30,
            max_chars_limit: MAX_ARTICLE_CHARS,
        }
    }
}

impl FileFetchConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.user_agent.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BlankValue {
                    field: "fetch.user_agent".to_string(),
                },
                "fetch.user_agent is empty, falling back to the default",
            ));
        }
        issues.extend(check_timeout("fetch.timeout_secs", self.timeout_secs));
        issues.extend(check_count(
            "fetch.max_chars_limit",
            self.max_chars_limit as u64,
            MAX_ARTICLE_CHARS as u64,
        ));

        issues
    }

    pub fn to_settings(&self) -> FetchSettings {
        let user_agent = match self.user_agent.trim() {
            "" => default_user_agent(),
            ua => ua.to_string(),
        };
        FetchSettings {
            user_agent,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            max_chars_limit: self.max_chars_limit.clamp(1, MAX_ARTICLE_CHARS),
        }
    }
}
