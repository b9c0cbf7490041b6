//! **Web adapters**: the search backend client and the article fetcher
//!
//! | Adapter | Port | Request |
//! |---------|------|---------|
//! | [`TavilySearchClient`] | `SearchBackendPort` | `POST` JSON, bearer auth |
//! | [`HttpArticleFetcher`] | `ArticleSourcePort` | `GET`, fixed `User-Agent` |
//!
//! Both hold their own `reqwest::Client` (a bounded connection pool) with the
//! configured per-request timeout, and classify transport failures the same
//! way via [`client::map_transport_error`].

pub mod client;
pub mod credentials;
pub mod fetch;
pub mod response;
pub mod search;

pub use credentials::CredentialSource;
pub use fetch::HttpArticleFetcher;
pub use response::BackendResponse;
pub use search::TavilySearchClient;
