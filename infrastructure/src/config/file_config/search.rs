//! Search backend configuration from TOML (`[search]` section)

use super::{check_count, check_timeout};
use scout_application::config::{DEFAULT_API_KEY_ENV, DEFAULT_API_URL};
use scout_application::SearchSettings;
use scout_domain::{ConfigIssue, ConfigIssueCode, MAX_RESULTS_LIMIT, SearchDepth};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Search endpoint (default: "https://api.tavily.com/search").
    pub api_url: String,
    /// Environment variable name for the API key (default: "TAVILY_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// "basic" or "advanced".
    pub depth: String,
    /// Result count for open searches.
    pub default_max_results: u32,
    /// Backend ceiling, itself capped at 20.
    pub max_results_limit: u32,
    pub include_raw_content: bool,
    pub timeout_secs: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            depth: SearchDepth::default().as_str().to_string(),
            default_max_results: scout_domain::search::DEFAULT_MAX_RESULTS,
            max_results_limit: MAX_RESULTS_LIMIT,
            include_raw_content: false,
            timeout_secs: 30,
        }
    }
}

impl FileSearchConfig {
    /// Parse depth string into SearchDepth
    ///
    /// Accepts: "basic", "advanced" (any case)
    pub fn parse_depth(&self) -> (SearchDepth, Vec<ConfigIssue>) {
        match self.depth.parse::<SearchDepth>() {
            Ok(depth) => (depth, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "search.depth".to_string(),
                        value: self.depth.clone(),
                        valid_values: SearchDepth::all_names()
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    },
                    format!(
                        "search.depth: unknown value '{}', falling back to 'basic'",
                        self.depth
                    ),
                );
                (SearchDepth::default(), vec![issue])
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.api_url.trim();
        if url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BlankValue {
                    field: "search.api_url".to_string(),
                },
                "search.api_url must not be empty",
            ));
        } else if !is_http_url(url) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "search.api_url".to_string(),
                    value: self.api_url.clone(),
                },
                format!("search.api_url: '{}' is not an http(s) URL", self.api_url),
            ));
        }

        let has_inline_key = self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty());
        if !has_inline_key && self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BlankValue {
                    field: "search.api_key_env".to_string(),
                },
                "search.api_key_env is empty and no api_key is set; searches will fail",
            ));
        }

        issues.extend(self.parse_depth().1);
        issues.extend(check_count(
            "search.max_results_limit",
            u64::from(self.max_results_limit),
            u64::from(MAX_RESULTS_LIMIT),
        ));
        issues.extend(check_count(
            "search.default_max_results",
            u64::from(self.default_max_results),
            u64::from(self.max_results_limit.min(MAX_RESULTS_LIMIT)),
        ));
        issues.extend(check_timeout("search.timeout_secs", self.timeout_secs));

        issues
    }

    pub fn to_settings(&self) -> SearchSettings {
        SearchSettings {
            api_url: self.api_url.trim().to_string(),
            api_key_env: self.api_key_env.trim().to_string(),
            api_key: self
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            depth: self.parse_depth().0,
            default_max_results: self.default_max_results.max(1),
            max_results_limit: self.max_results_limit.clamp(1, MAX_RESULTS_LIMIT),
            include_raw_content: self.include_raw_content,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
