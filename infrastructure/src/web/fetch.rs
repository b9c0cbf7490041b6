//! HTTP article fetcher, the concrete [`ArticleSourcePort`].
//!
//! One GET per call with a fixed `User-Agent`. No HTML is parsed. The body
//! is read only as far as the requested size needs, then decoded as UTF-8
//! with invalid sequences replaced; exact truncation happens in the use case.

use super::client::{
    MAX_UTF8_BYTES, build_http_client, map_transport_error, read_capped, status_error,
};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use scout_application::FetchSettings;
use scout_application::ports::article_source::ArticleSourcePort;
use scout_domain::RetrievalError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpArticleFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpArticleFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, RetrievalError> {
        let client = build_http_client(settings.timeout)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: reqwest::Client, settings: &FetchSettings) -> Self {
        Self {
            client,
            user_agent: settings.user_agent.clone(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl ArticleSourcePort for HttpArticleFetcher {
    async fn fetch_body(&self, url: &str, max_chars: usize) -> Result<String, RetrievalError> {
        debug!("GET {} (max_chars={})", url, max_chars);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| map_transport_error(e, url))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        // Room for max_chars + 1 whole characters, so a longer article is
        // still seen as truncated.
        let limit = max_chars
            .saturating_add(1)
            .saturating_mul(MAX_UTF8_BYTES);
        let bytes = read_capped(response, limit)
            .await
            .map_err(|e| map_transport_error(e, url))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
