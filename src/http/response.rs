//! Response construction helpers.
//!
//! Success bodies are the upstream bytes, never re-encoded. Error bodies
//! never carry upstream or transport detail.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// Content type attached to relayed payloads when CORS is enabled.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Generic message for the plain relay's failure response.
pub const GENERIC_ERROR_BODY: &str = "Internal Server Error";

/// 200 response carrying `payload` unchanged, with no content type.
pub fn passthrough(payload: Bytes) -> Response {
    Response::new(Body::from(payload))
}

/// Opaque 500 with a generic text message.
pub fn generic_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response()
}

/// Response with the given status and no body or content type.
pub fn empty(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

/// Mark a relayed payload as JSON.
pub fn set_json_content_type(response: &mut Response) {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
}
