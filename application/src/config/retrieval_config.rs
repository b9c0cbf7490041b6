//! Retrieval configuration, resolved once at startup, passed by value.
//!
//! [`RetrievalConfig`] groups everything the search and fetch paths need to
//! know about their environment. Infrastructure builds it from config files
//! and environment overrides; adapters and use cases receive it (or the
//! section they need) at construction and never read process state
//! themselves.

use scout_domain::{DEFAULT_MAX_CHARS, MAX_ARTICLE_CHARS, MAX_RESULTS_LIMIT, SearchDepth};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default search endpoint
pub const DEFAULT_API_URL: &str = "https://api.tavily.com/search";

/// Environment variable consulted for the search credential
pub const DEFAULT_API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Host the support search tool restricts itself to
pub const DEFAULT_SUPPORT_DOMAIN: &str = "support.langchain.com";

/// Default timeout for one outbound request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Endpoint receiving the search POST.
    pub api_url: String,
    /// Name of the environment variable holding the credential.
    pub api_key_env: String,
    /// Inline credential. Takes precedence over `api_key_env` when set.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Default search depth.
    pub depth: SearchDepth,
    /// Result count when the caller does not ask for one (open searches).
    pub default_max_results: u32,
    /// Backend-level ceiling on result count.
    pub max_results_limit: u32,
    /// Whether raw page content is requested by default.
    pub include_raw_content: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            depth: SearchDepth::default(),
            default_max_results: scout_domain::search::DEFAULT_MAX_RESULTS,
            max_results_limit: MAX_RESULTS_LIMIT,
            include_raw_content: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Settings for the support-article tool pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportSettings {
    /// Host every support search is restricted to. Also used as the
    /// `source` label on returned articles.
    pub domain: String,
    /// Result count when the agent does not ask for one.
    pub default_max_results: u32,
    /// Tool-level ceiling; the backend ceiling still applies on top.
    pub max_results_limit: u32,
    /// Characters returned by a fetch when the agent does not ask.
    pub default_max_chars: usize,
}

impl Default for SupportSettings {
    fn default() -> Self {
        Self {
            domain: DEFAULT_SUPPORT_DOMAIN.to_string(),
            default_max_results: 5,
            max_results_limit: 10,
            default_max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Settings for article fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// `User-Agent` header sent with every fetch.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Ceiling on characters returned by one fetch.
    pub max_chars_limit: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
            max_chars_limit: MAX_ARTICLE_CHARS,
        }
    }
}

/// `support-scout/<version>`
pub fn default_user_agent() -> String {
    format!("support-scout/{}", env!("CARGO_PKG_VERSION"))
}

/// Complete retrieval configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalConfig {
    pub search: SearchSettings,
    pub support: SupportSettings,
    pub fetch: FetchSettings,
}

impl RetrievalConfig {
    // ==================== Builder Methods ====================

    pub fn with_search(mut self, search: SearchSettings) -> Self {
        self.search = search;
        self
    }

    pub fn with_support(mut self, support: SupportSettings) -> Self {
        self.support = support;
        self
    }

    pub fn with_fetch(mut self, fetch: FetchSettings) -> Self {
        self.fetch = fetch;
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.search.api_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.search.api_key = Some(key.into());
        self
    }

    pub fn with_support_domain(mut self, domain: impl Into<String>) -> Self {
        self.support.domain = domain.into();
        self
    }

    // ==================== Effective Limits ====================

    /// Ceiling for support searches: the tighter of the tool and backend limits.
    pub fn support_results_ceiling(&self) -> u32 {
        self.support
            .max_results_limit
            .min(self.search.max_results_limit)
            .clamp(1, MAX_RESULTS_LIMIT)
    }

    /// Ceiling for open (unrestricted or caller-restricted) searches.
    pub fn search_results_ceiling(&self) -> u32 {
        self.search.max_results_limit.clamp(1, MAX_RESULTS_LIMIT)
    }
}
