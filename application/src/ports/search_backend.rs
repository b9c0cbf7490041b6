//! Search backend port
//!
//! Defines the interface for querying the external full-text search service.

use async_trait::async_trait;
use scout_domain::{RetrievalError, SearchQuery, SearchResult};

/// Port for the search backend
///
/// One call is one outbound request. Implementations do not retry and do not
/// post-filter by domain; the backend is trusted to honor the filter.
#[async_trait]
pub trait SearchBackendPort: Send + Sync {
    /// Run `query` and return results in backend ranking order.
    ///
    /// A response whose shape cannot be interpreted yields `Ok(vec![])`
    /// (and a warning), not an error.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, RetrievalError>;
}
