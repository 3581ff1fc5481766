//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching the upstream feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The outbound request could not be built.
    #[error("failed to build upstream request: {0}")]
    Request(#[source] reqwest::Error),

    /// DNS, connect, TLS or other transport failure.
    #[error("upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a status above 299.
    #[error("error getting data: upstream returned {0}")]
    Status(StatusCode),

    /// The response body could not be read to the end.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "request",
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Body(_) => "body",
        }
    }
}

/// Result type for upstream operations.
pub type FetchResult<T> = Result<T, FetchError>;
