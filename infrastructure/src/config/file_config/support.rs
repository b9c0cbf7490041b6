//! Support tool configuration from TOML (`[support]` section)

use super::check_count;
use scout_application::SupportSettings;
use scout_application::config::DEFAULT_SUPPORT_DOMAIN;
use scout_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_MAX_CHARS, MAX_ARTICLE_CHARS, MAX_RESULTS_LIMIT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSupportConfig {
    /// Host every support search is restricted to.
    pub domain: String,
    pub default_max_results: u32,
    pub max_results_limit: u32,
    /// Characters returned by `get_article_content` when not specified.
    pub default_max_chars: usize,
}

impl Default for FileSupportConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_SUPPORT_DOMAIN.to_string(),
            default_max_results: 5,
            max_results_limit: 10,
            default_max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl FileSupportConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.domain.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BlankValue {
                    field: "support.domain".to_string(),
                },
                "support.domain must not be empty",
            ));
        }

        issues.extend(check_count(
            "support.max_results_limit",
            u64::from(self.max_results_limit),
            u64::from(MAX_RESULTS_LIMIT),
        ));
        issues.extend(check_count(
            "support.default_max_results",
            u64::from(self.default_max_results),
            u64::from(self.max_results_limit.min(MAX_RESULTS_LIMIT)),
        ));
        issues.extend(check_count(
            "support.default_max_chars",
            self.default_max_chars as u64,
            MAX_ARTICLE_CHARS as u64,
        ));

        issues
    }

    pub fn to_settings(&self) -> SupportSettings {
        SupportSettings {
            domain: self.domain.trim().to_string(),
            default_max_results: self.default_max_results.max(1),
            max_results_limit: self.max_results_limit.clamp(1, MAX_RESULTS_LIMIT),
            default_max_chars: self.default_max_chars.clamp(1, MAX_ARTICLE_CHARS),
        }
    }
}
