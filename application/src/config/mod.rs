//! Application-level configuration.
//!
//! - [`RetrievalConfig`]: search backend, support tool and fetch settings

pub mod retrieval_config;

pub use retrieval_config::{
    DEFAULT_API_KEY_ENV, DEFAULT_API_URL, DEFAULT_SUPPORT_DOMAIN, DEFAULT_TIMEOUT, FetchSettings,
    RetrievalConfig, SearchSettings, SupportSettings, default_user_agent,
};
