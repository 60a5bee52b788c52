//! The GraphQL proxy endpoint.
//!
//! Per-request ladder: demo fixtures, then the configuration gate, then
//! a live forward. Demo and gate answers are always HTTP 200 so GraphQL
//! clients render them as data; only a transport failure on the live
//! path becomes an HTTP error.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::{debug, error, warn};

use campusgate_core::configuration_required_envelope;

use crate::bootstrap::GatewayMode;
use crate::error::HttpError;
use crate::relay;
use crate::state::AppState;

/// Marker header present on every demo-mode response.
pub const DEMO_MODE_HEADER: &str = "x-demo-mode";

/// Serve a GraphQL request.
///
/// Registered for both `POST` and `GET /api/graphql`; the ladder is
/// identical for both methods.
pub async fn execute(State(state): State<AppState>, body: Bytes) -> Result<Response, HttpError> {
    match &state.mode {
        GatewayMode::Demo(mock) => {
            let raw = std::str::from_utf8(&body).unwrap_or_default();
            Ok(demo_response(mock.respond(raw)))
        }
        GatewayMode::Unconfigured => {
            let missing = state.config.missing_vars();
            warn!(
                target: "campusgate.graphql",
                ?missing,
                "answering with configuration gate: CMS not configured"
            );
            Ok(Json(configuration_required_envelope(&missing)).into_response())
        }
        GatewayMode::Live(client) => {
            let upstream = client.execute(body).await.map_err(|err| {
                error!(target: "campusgate.graphql", error = %err, "upstream GraphQL request failed");
                HttpError::GraphqlProxy {
                    details: err.to_string(),
                }
            })?;
            debug!(
                target: "campusgate.graphql",
                status = upstream.status().as_u16(),
                "relaying upstream response"
            );
            relay::buffered(upstream).await.map_err(|err| {
                error!(target: "campusgate.graphql", error = %err, "upstream response died mid-read");
                HttpError::GraphqlProxy {
                    details: err.to_string(),
                }
            })
        }
    }
}

/// 200 with the fixture payload and the demo marker header.
fn demo_response(payload: Value) -> Response {
    let mut response = Json(payload).into_response();
    response.headers_mut().insert(
        HeaderName::from_static(DEMO_MODE_HEADER),
        HeaderValue::from_static("true"),
    );
    response
}
