//! Upstream feed client.
//!
//! # Responsibilities
//! - Issue exactly one GET to the upstream URL per call
//! - Treat any status above 299 as a failure
//! - Buffer the full body on success
//!
//! The response is owned by `fetch` and consumed or dropped on every path,
//! which releases the underlying connection.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::upstream::types::{FetchError, FetchResult};

/// Highest status code still treated as success.
const MAX_SUCCESS_STATUS: u16 = 299;

/// Source of the upstream payload.
#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    /// Fetch the full upstream body.
    async fn fetch(&self) -> FetchResult<Bytes>;
}

/// Fetcher backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Create a fetcher with a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Create a fetcher reusing an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The URL this fetcher requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl UpstreamFetcher for HttpFetcher {
    async fn fetch(&self) -> FetchResult<Bytes> {
        let request = self
            .client
            .get(self.url.as_str())
            .build()
            .map_err(FetchError::Request)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status.as_u16() > MAX_SUCCESS_STATUS {
            return Err(FetchError::Status(status));
        }

        response.bytes().await.map_err(FetchError::Body)
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("url", &self.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let fetcher = HttpFetcher::new("not a url");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = HttpFetcher::new(format!("http://{}/gp", addr));
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_debug_shows_url() {
        let fetcher = HttpFetcher::new("http://127.0.0.1:1/gp");
        assert_eq!(fetcher.url(), "http://127.0.0.1:1/gp");
        assert!(format!("{:?}", fetcher).contains("127.0.0.1:1"));
    }
}
