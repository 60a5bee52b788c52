//! Upstream-to-client response relays.
//!
//! Converts a `reqwest::Response` into an Axum response without
//! rewriting it. GraphQL responses are relayed buffered and
//! byte-for-byte; managed files are streamed chunk by chunk so a large
//! image never sits fully in gateway memory.

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;

/// Headers carried through on streamed asset relays. Everything else
/// (hop-by-hop headers, cookies) stays behind.
const ASSET_HEADERS: [HeaderName; 5] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CACHE_CONTROL,
    header::ETAG,
    header::LAST_MODIFIED,
];

fn relay_status(upstream: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(upstream.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Relay a buffered response: upstream status and body verbatim.
///
/// The body is never parsed or re-serialized on the way through. An
/// upstream without a content type gets `application/json`, which is
/// what every GraphQL server sends anyway.
pub async fn buffered(upstream: reqwest::Response) -> reqwest::Result<Response> {
    let status = relay_status(upstream.status());
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let body = upstream.bytes().await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, content_type);
    Ok((status, headers, body).into_response())
}

/// Relay a streamed response for file downloads.
pub fn streamed(upstream: reqwest::Response) -> Response {
    let status = relay_status(upstream.status());

    let mut headers = HeaderMap::new();
    for name in ASSET_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            headers.insert(name, value.clone());
        }
    }

    let stream = upstream
        .bytes_stream()
        .map(|chunk| chunk.map_err(std::io::Error::other));

    (status, headers, Body::from_stream(stream)).into_response()
}
