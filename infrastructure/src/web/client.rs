//! Shared HTTP plumbing for the web adapters
//!
//! Maps reqwest's failure modes onto [`RetrievalError`] kinds so that both
//! adapters classify transport problems identically. Bodies that are only
//! partly needed are read chunk by chunk up to a byte cap.

use reqwest::{Client, Response};
use scout_domain::RetrievalError;
use std::time::Duration;

/// Longest slice of an error body carried into an error message
const ERROR_BODY_PREVIEW: usize = 200;

/// Widest UTF-8 encoding of one character
pub const MAX_UTF8_BYTES: usize = 4;

/// Build a client whose every request is bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<Client, RetrievalError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RetrievalError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Classify a transport-level failure for `target`.
pub fn map_transport_error(err: reqwest::Error, target: &str) -> RetrievalError {
    if err.is_timeout() {
        RetrievalError::Timeout(format!("{} did not respond in time", target))
    } else {
        RetrievalError::Network(format!("{}: {}", target, err))
    }
}

/// Read at most `limit` bytes of the body; the rest is never pulled off
/// the connection.
pub async fn read_capped(mut response: Response, limit: usize) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = limit - body.len();
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Turn a non-2xx response into a backend error carrying its status.
pub async fn status_error(response: Response) -> RetrievalError {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    let bytes = read_capped(response, ERROR_BODY_PREVIEW * MAX_UTF8_BYTES)
        .await
        .unwrap_or_default();
    let body = String::from_utf8_lossy(&bytes);
    let body = body.trim();

    let message = if body.is_empty() {
        reason
    } else {
        let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
        format!("{}: {}", reason, preview)
    };

    RetrievalError::BackendStatus {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_status_error_includes_reason_and_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(r#"{"detail":"slow down"}"#))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        let err = status_error(response).await;

        assert_eq!(err.status(), Some(429));
        assert_eq!(
            err.to_string(),
            r#"Backend returned HTTP 429: Too Many Requests: {"detail":"slow down"}"#
        );
    }

    #[tokio::test]
    async fn test_status_error_without_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        let err = status_error(response).await;
        assert_eq!(err.to_string(), "Backend returned HTTP 503: Service Unavailable");
    }

    #[tokio::test]
    async fn test_status_error_previews_large_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(1_000_000)))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        let err = status_error(response).await;
        assert_eq!(
            err.to_string(),
            format!(
                "Backend returned HTTP 500: Internal Server Error: {}",
                "x".repeat(ERROR_BODY_PREVIEW)
            )
        );
    }

    #[tokio::test]
    async fn test_read_capped_stops_at_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("y".repeat(500_000)))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        assert_eq!(read_capped(response, 64).await.unwrap(), vec![b'y'; 64]);

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        assert!(read_capped(response, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_capped_short_body_is_whole() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("short"))
            .mount(&mock_server)
            .await;

        let response = reqwest::get(mock_server.uri()).await.unwrap();
        assert_eq!(read_capped(response, 1024).await.unwrap(), b"short".to_vec());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = build_http_client(Duration::from_secs(5)).unwrap();
        let err = client.get("http://127.0.0.1:1/").send().await.unwrap_err();
        let mapped = map_transport_error(err, "http://127.0.0.1:1/");
        assert!(matches!(mapped, RetrievalError::Network(_)));
    }
}
