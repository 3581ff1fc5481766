//! The relay handler: one upstream fetch per request, body passed through.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
};

use crate::http::request::RequestIdExt;
use crate::http::response;
use crate::observability::metrics::{self, Outcome};
use crate::upstream::UpstreamFetcher;

/// State injected into the relay handler.
#[derive(Clone)]
pub struct RelayState {
    pub fetcher: Arc<dyn UpstreamFetcher>,
}

impl RelayState {
    pub fn new(fetcher: Arc<dyn UpstreamFetcher>) -> Self {
        Self { fetcher }
    }
}

/// Fetch the upstream feed and write it back unchanged.
///
/// Any fetch failure becomes an opaque 500; the cause is only logged.
pub async fn relay_handler(State(state): State<RelayState>, headers: HeaderMap) -> Response {
    let request_id = headers.request_id();
    let start = Instant::now();

    let result = state.fetcher.fetch().await;
    metrics::record_fetch(start);

    match result {
        Ok(payload) => {
            tracing::debug!(
                request_id = %request_id,
                bytes = payload.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Relayed upstream payload"
            );
            metrics::record_request(Outcome::Ok);
            response::passthrough(payload)
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Upstream fetch failed"
            );
            metrics::record_request(Outcome::UpstreamError);
            response::generic_error()
        }
    }
}

/// Method gate for the plain relay: anything but `GET` is an empty 405.
pub async fn reject_method() -> Response {
    metrics::record_request(Outcome::MethodNotAllowed);
    let mut response = response::empty(StatusCode::METHOD_NOT_ALLOWED);
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET"));
    response
}
