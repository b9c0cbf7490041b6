//! Tavily search client, the concrete [`SearchBackendPort`].
//!
//! # Request
//!
//! ```text
//! POST {api_url}
//! Authorization: Bearer {key}
//! Content-Type: application/json
//!
//! {"query", "max_results", "search_depth", "include_answer": false,
//!  "include_raw_content", "include_domains"?}
//! ```
//!
//! `include_domains` is omitted entirely when the filter is empty.
//!
//! # Failure mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | No credential | `Configuration` (no request is sent) |
//! | Non-2xx | `BackendStatus` |
//! | Body is not JSON | `Backend` |
//! | Timed out | `Timeout` |
//! | Other transport fault | `Network` |
//! | JSON of the wrong shape | `Ok(vec![])` + warning |

use super::client::{build_http_client, map_transport_error, status_error};
use super::credentials::CredentialSource;
use super::response::BackendResponse;
use async_trait::async_trait;
use scout_application::SearchSettings;
use scout_application::ports::search_backend::SearchBackendPort;
use scout_domain::{RetrievalError, SearchQuery, SearchResult};
use serde_json::{Value, json};
use tracing::{debug, info};

/// Search backend adapter over HTTP.
#[derive(Debug, Clone)]
pub struct TavilySearchClient {
    client: reqwest::Client,
    api_url: String,
    credentials: CredentialSource,
}

impl TavilySearchClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(settings: &SearchSettings) -> Result<Self, RetrievalError> {
        let client = build_http_client(settings.timeout)?;
        Ok(Self::with_client(client, settings))
    }

    /// Create a client sharing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, settings: &SearchSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            credentials: CredentialSource::from_settings(settings),
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// JSON body for `query`.
    pub fn payload(query: &SearchQuery) -> Value {
        let mut payload = json!({
            "query": query.text(),
            "max_results": query.limit().get(),
            "search_depth": query.depth().as_str(),
            "include_answer": false,
            "include_raw_content": query.include_raw_content(),
        });
        if !query.domain_filter().is_empty() {
            payload["include_domains"] = json!(query.domain_filter().to_vec());
        }
        payload
    }
}

#[async_trait]
impl SearchBackendPort for TavilySearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, RetrievalError> {
        let api_key = self.credentials.resolve()?;
        let payload = Self::payload(query);
        debug!("POST {} {}", self.api_url, payload);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| map_transport_error(e, &self.api_url))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                RetrievalError::Backend(format!("Search response is not valid JSON: {}", e))
            } else {
                map_transport_error(e, &self.api_url)
            }
        })?;

        let results = BackendResponse::classify(body).into_results();
        info!("Search backend returned {} results", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{DomainFilter, ResultLimit, SearchDepth};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> SearchSettings {
        SearchSettings {
            api_url: format!("{}/search", server.uri()),
            api_key: Some("tvly-test".to_string()),
            ..SearchSettings::default()
        }
    }

    fn client(server: &MockServer) -> TavilySearchClient {
        TavilySearchClient::new(&settings(server)).unwrap()
    }

    fn support_query(text: &str) -> SearchQuery {
        SearchQuery::new(text)
            .unwrap()
            .with_limit(ResultLimit::clamped(5, 10))
            .with_domains(DomainFilter::new(["support.langchain.com"]))
    }

    // ==================== Payload ====================

    #[test]
    fn test_payload_with_domains() {
        let query = support_query("rate limit error").with_depth(SearchDepth::Advanced);
        assert_eq!(
            TavilySearchClient::payload(&query),
            json!({
                "query": "rate limit error",
                "max_results": 5,
                "search_depth": "advanced",
                "include_answer": false,
                "include_raw_content": false,
                "include_domains": ["support.langchain.com"]
            })
        );
    }

    #[test]
    fn test_payload_omits_empty_domains() {
        let query = SearchQuery::new("q").unwrap().with_raw_content(true);
        let payload = TavilySearchClient::payload(&query);
        assert!(payload.get("include_domains").is_none());
        assert_eq!(payload["include_raw_content"], true);
        assert_eq!(payload["search_depth"], "basic");
    }

    // ==================== Successful Searches ====================

    #[tokio::test]
    async fn test_search_sends_request_and_parses_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tvly-test"))
            .and(body_partial_json(json!({
                "query": "rate limit error",
                "max_results": 5,
                "include_answer": false,
                "include_domains": ["support.langchain.com"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "rate limit error",
                "results": [
                    {"url": "https://support.langchain.com/a", "title": "A", "content": "first", "score": 0.9},
                    {"url": "", "title": "B", "content": "second"},
                    {"url": "https://support.langchain.com/c", "content": "third"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let results = client(&mock_server)
            .search(&support_query("rate limit error"))
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].url, "https://support.langchain.com/a");
        assert_eq!(results[0].snippet, "first");
        assert_eq!(results[0].score, Some(0.9));
        assert_eq!(results[2].title, "Untitled");
    }

    #[tokio::test]
    async fn test_request_without_domains_has_no_include_domains() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&mock_server)
            .await;

        client(&mock_server)
            .search(&SearchQuery::new("q").unwrap())
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("include_domains").is_none());
    }

    #[tokio::test]
    async fn test_malformed_shape_yields_empty_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": "oops"})))
            .mount(&mock_server)
            .await;

        let results = client(&mock_server)
            .search(&support_query("q"))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_missing_credential_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let settings = SearchSettings {
            api_key: None,
            api_key_env: "SUPPORT_SCOUT_TEST_UNSET_KEY".to_string(),
            ..settings(&mock_server)
        };
        let err = TavilySearchClient::new(&settings)
            .unwrap()
            .search(&support_query("q"))
            .await
            .unwrap_err();

        assert!(matches!(err, RetrievalError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": {"error": "Unauthorized"}})),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search(&support_query("q"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.kind(), scout_domain::ErrorKind::Backend);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .search(&support_query("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, RetrievalError::Backend(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let settings = SearchSettings {
            timeout: Duration::from_millis(100),
            ..settings(&mock_server)
        };
        let err = TavilySearchClient::new(&settings)
            .unwrap()
            .search(&support_query("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, RetrievalError::Timeout(_)));
    }
}
