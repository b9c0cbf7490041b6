//! Configuration file loading for support-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TAVILY_API_URL`, `TAVILY_SEARCH_DEPTH`, `TAVILY_MAX_RESULTS`
//! 2. `--config <path>` specified file
//! 3. Project root: `./scout.toml` or `./.scout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/support-scout/config.toml`
//! 5. Default values
//!
//! The API key is not an override: it is resolved per request from the
//! variable named by `search.api_key_env`.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileFetchConfig, FileOutputConfig, FileSearchConfig, FileSupportConfig,
};
pub use loader::{ConfigLoader, ConfigSources, ENV_OVERRIDES};
