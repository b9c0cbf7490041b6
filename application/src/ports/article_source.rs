//! Article source port

use async_trait::async_trait;
use scout_domain::RetrievalError;

/// Port for dereferencing an article URL
///
/// Returns the response body, or at least its first `max_chars + 1`
/// characters. Adapters may stop reading once that much has arrived, so the
/// use case can still tell whether the article was longer. Truncation and
/// framing happen in the use case.
#[async_trait]
pub trait ArticleSourcePort: Send + Sync {
    async fn fetch_body(&self, url: &str, max_chars: usize) -> Result<String, RetrievalError>;
}
