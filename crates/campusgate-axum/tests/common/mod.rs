//! Shared helpers for the gateway integration tests: context builders
//! over literal environments and a fake CMS origin that records the
//! traffic it sees.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;

use campusgate_axum::GatewayContext;
use campusgate_core::{
    ENV_DEMO_MODE, ENV_DRUPAL_BASE_URL, ENV_DRUPAL_CLIENT_ID, ENV_DRUPAL_CLIENT_SECRET,
    ENV_NODE_ENV, GatewayConfig,
};

// ────────────────────────────────────────────────────────────────────────────
// Context builders
// ────────────────────────────────────────────────────────────────────────────

/// Build a context from literal variable pairs, never touching process
/// env (which is racy under the parallel test runner).
pub fn context_from(pairs: &[(&str, &str)]) -> GatewayContext {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let config = GatewayConfig::from_lookup(move |name| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    });
    GatewayContext::new(config).expect("gateway context")
}

/// Demo mode in a development environment.
pub fn demo_context() -> GatewayContext {
    context_from(&[(ENV_DEMO_MODE, "true"), (ENV_NODE_ENV, "development")])
}

/// Demo mode with production CORS (same-host only).
pub fn demo_context_production() -> GatewayContext {
    context_from(&[(ENV_DEMO_MODE, "true")])
}

/// No variables set at all: the configuration gate engages.
pub fn unconfigured_context() -> GatewayContext {
    context_from(&[])
}

/// Live mode pointed at the given origin.
pub fn live_context(base_url: &str) -> GatewayContext {
    context_from(&[
        (ENV_DRUPAL_BASE_URL, base_url),
        (ENV_DRUPAL_CLIENT_ID, "campusgate"),
        (ENV_DRUPAL_CLIENT_SECRET, "test-secret"),
        (ENV_NODE_ENV, "development"),
    ])
}

// ────────────────────────────────────────────────────────────────────────────
// Request helpers
// ────────────────────────────────────────────────────────────────────────────

/// A `POST /api/graphql` request with a raw JSON body.
pub fn graphql_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

// ────────────────────────────────────────────────────────────────────────────
// Fake CMS origin
// ────────────────────────────────────────────────────────────────────────────

/// What the fake CMS has seen so far.
#[derive(Default)]
pub struct UpstreamLog {
    /// `Authorization` header of each /graphql request, in order.
    pub graphql_auth: Mutex<Vec<Option<String>>>,
    /// Number of token grants requested.
    pub token_calls: AtomicUsize,
    /// `path?query` of each asset request.
    pub asset_requests: Mutex<Vec<String>>,
}

impl UpstreamLog {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }
}

pub struct FakeCms {
    pub base_url: String,
    pub log: Arc<UpstreamLog>,
}

struct UpstreamState {
    log: Arc<UpstreamLog>,
    graphql_status: u16,
    graphql_body: &'static str,
    fail_token: bool,
}

/// Spawn a fake CMS origin on an ephemeral loopback port.
///
/// `/graphql` answers with the given status and body, `/oauth/token`
/// issues `demo-token` grants (or 500s when `fail_token` is set), and
/// `/sites/{*path}` serves a canned PNG while recording the path and
/// query it was asked for.
pub async fn spawn_fake_cms(
    graphql_status: u16,
    graphql_body: &'static str,
    fail_token: bool,
) -> FakeCms {
    let log = Arc::new(UpstreamLog::default());
    let state = Arc::new(UpstreamState {
        log: log.clone(),
        graphql_status,
        graphql_body,
        fail_token,
    });

    let router = Router::new()
        .route("/oauth/token", post(token_endpoint))
        .route("/graphql", post(graphql_endpoint))
        .route("/sites/{*path}", get(asset_endpoint))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake cms");
    let addr = listener.local_addr().expect("fake cms addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fake cms");
    });

    FakeCms {
        base_url: format!("http://{addr}"),
        log,
    }
}

async fn token_endpoint(State(state): State<Arc<UpstreamState>>) -> Response {
    state.log.token_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_token {
        return (StatusCode::INTERNAL_SERVER_ERROR, "oauth backend down").into_response();
    }
    Json(serde_json::json!({
        "token_type": "Bearer",
        "access_token": "demo-token",
        "expires_in": 3600,
    }))
    .into_response()
}

async fn graphql_endpoint(
    State(state): State<Arc<UpstreamState>>,
    headers: HeaderMap,
) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    state.log.graphql_auth.lock().unwrap().push(auth);

    let status = StatusCode::from_u16(state.graphql_status).expect("valid status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.graphql_body,
    )
        .into_response()
}

async fn asset_endpoint(
    State(state): State<Arc<UpstreamState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let record = match query {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    state.log.asset_requests.lock().unwrap().push(record);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "public, max-age=31536000"),
        ],
        "fake-png-bytes",
    )
        .into_response()
}
