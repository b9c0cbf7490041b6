//! Search subdomain
//!
//! ```text
//! SearchQuery ──▶ (backend) ──▶ Vec<SearchResult> ──▶ ResultFormatter ──▶ SearchEnvelope
//! ```
//!
//! The backend call itself lives behind a port in the application layer;
//! everything here is pure.

pub mod envelope;
pub mod query;
pub mod result;

pub use envelope::{
    ArticleSummary, FETCH_HINT_NOTE, NO_RESULTS_NOTE, ResultFormatter, SearchEnvelope,
    SearchFailure,
};
pub use query::{
    DEFAULT_MAX_RESULTS, DomainFilter, MAX_RESULTS_LIMIT, ResultLimit, SearchDepth, SearchQuery,
};
pub use result::{PLACEHOLDER_TITLE, SearchResult};
