//! Cross-origin middleware.
//!
//! Turns the plain relay into the browser-facing variant:
//! - every response carries the permissive CORS headers
//! - `OPTIONS` is answered with 204 without touching the upstream
//! - methods other than `GET`/`OPTIONS` get an empty 405
//! - successful `GET`s are labeled as JSON, failures lose their body

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
            ALLOW,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::Response,
};

use crate::http::response;
use crate::observability::metrics::{self, Outcome};

const ALLOWED_METHODS: &str = "GET,OPTIONS";
const MAX_AGE_SECS: &str = "86400";

pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let requested_headers = request
        .headers()
        .get(ACCESS_CONTROL_REQUEST_HEADERS)
        .filter(|v| !v.is_empty())
        .cloned();

    let method = request.method().clone();
    let mut response = match method {
        Method::OPTIONS => {
            metrics::record_request(Outcome::Preflight);
            response::empty(StatusCode::NO_CONTENT)
        }
        Method::GET => {
            let mut relayed = next.run(request).await;
            if relayed.status().is_success() {
                response::set_json_content_type(&mut relayed);
                relayed
            } else {
                response::empty(relayed.status())
            }
        }
        _ => {
            metrics::record_request(Outcome::MethodNotAllowed);
            response::empty(StatusCode::METHOD_NOT_ALLOWED)
        }
    };

    apply_cors_headers(response.headers_mut(), requested_headers);
    response
}

/// Insert the CORS header set. `Access-Control-Allow-Headers` echoes the
/// preflight's requested headers and is omitted when there were none.
pub fn apply_cors_headers(headers: &mut HeaderMap, requested_headers: Option<HeaderValue>) {
    headers.insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    if let Some(value) = requested_headers {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, value);
    }
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE_SECS));
}
