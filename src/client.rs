//! Metrics endpoint client
//!
//! One GET per refresh, no parameters, no auth. Any failure becomes a
//! [`FetchError`]; retrying is the scheduler's next tick, never ours.

use reqwest::Url;

use crate::error::FetchError;
use crate::types::MetricsSnapshot;

/// Longest slice of an error body kept in the error message
const MAX_ERROR_BODY: usize = 200;

/// Source of metrics snapshots
#[allow(async_fn_in_trait)] // single-threaded wasm, futures are never sent
pub trait MetricsSource {
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, FetchError>;
}

/// HTTP client for the metrics endpoint
#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    url: Url,
}

impl MetricsClient {
    /// Create a client for an absolute endpoint URL
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::Url(format!("{url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Check status, then parse the body as a snapshot
    async fn handle_response(response: reqwest::Response) -> Result<MetricsSnapshot, FetchError> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

impl MetricsSource for MetricsClient {
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, FetchError> {
        log::debug!("GET {}", self.url);

        let response = self
            .http
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }
}

/// Parse a response body
pub fn parse_body(body: &str) -> Result<MetricsSnapshot, FetchError> {
    Ok(MetricsSnapshot::from_json(body)?)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_absolute_url() {
        assert!(matches!(MetricsClient::new("/api/metrics"), Err(FetchError::Url(_))));

        let client = MetricsClient::new("https://dash.example.com/api/metrics")
            .expect("absolute URL should be accepted");
        assert_eq!(client.url().path(), "/api/metrics");
    }

    #[test]
    fn test_parse_body() {
        let snapshot = parse_body(r#"{"token_price": 0.05}"#).expect("valid body");
        assert_eq!(snapshot.token_price, Some(0.05));

        assert!(matches!(parse_body("<html>oops</html>"), Err(FetchError::Json(_))));
        assert!(matches!(parse_body(r#"{"token_price": "high"}"#), Err(FetchError::Json(_))));
    }

    /// Serve one canned HTTP response on a local port, returning the endpoint URL.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/api/metrics")
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", r#"{"token_price": 0.0421, "mcap_rank": 900}"#.into()).await;
        let client = MetricsClient::new(&url).expect("valid url");

        let snapshot = client.fetch_metrics().await.expect("fetch should succeed");
        assert_eq!(snapshot.token_price, Some(0.0421));
        assert_eq!(snapshot.mcap_rank, Some(900.0));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let url = serve_once("503 Service Unavailable", "x".repeat(300)).await;
        let client = MetricsClient::new(&url).expect("valid url");

        match client.fetch_metrics().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, format!("{}...", "x".repeat(MAX_ERROR_BODY)));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_body() {
        let url = serve_once("200 OK", "<html>maintenance</html>".into()).await;
        let client = MetricsClient::new(&url).expect("valid url");

        assert!(matches!(client.fetch_metrics().await, Err(FetchError::Json(_))));
    }

    #[tokio::test]
    async fn test_fetch_network_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = MetricsClient::new(&format!("http://{addr}/api/metrics")).expect("valid url");
        assert!(matches!(client.fetch_metrics().await, Err(FetchError::Network(_))));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
