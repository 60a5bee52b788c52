//! CORS policy.
//!
//! Development allows any origin so a front end on another port can hit
//! the gateway. Everywhere else the policy is same-origin: the `Origin`
//! header is echoed back only when its host (including any explicit
//! port) equals the request's `Host`, and omitted otherwise. Browsers
//! then block the cross-origin read on their side.

use axum::http::request::Parts;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::Url;

use campusgate_core::Environment;

/// Build the CORS layer for the given deployment environment.
pub fn build_cors_layer(environment: Environment) -> CorsLayer {
    let allow_origin = if environment.is_development() {
        AllowOrigin::any()
    } else {
        AllowOrigin::predicate(same_host)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Whether the `Origin` header points back at the host being requested.
fn same_host(origin: &HeaderValue, parts: &Parts) -> bool {
    // HTTP/2 carries the authority in the URI instead of a Host header.
    let request_host = parts
        .headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| parts.uri.authority().map(|a| a.as_str().to_owned()));
    let Some(request_host) = request_host else {
        return false;
    };

    origin
        .to_str()
        .ok()
        .and_then(origin_host)
        .is_some_and(|host| host == request_host)
}

/// `host[:port]` of an Origin value, with scheme-default ports dropped
/// the same way browsers drop them from `Host`.
fn origin_host(origin: &str) -> Option<String> {
    let url = Url::parse(origin).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
