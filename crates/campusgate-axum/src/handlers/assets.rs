//! Managed-file passthrough.
//!
//! Live content references images under `/sites/default/files/` on the
//! CMS origin; relaying them through the gateway host means the front
//! end needs no second allowed image domain. Image-style URLs carry an
//! `itok` token in the query string, which must survive the relay.

use axum::extract::{Path, RawQuery, State};
use axum::response::Response;
use tracing::{debug, error};

use crate::bootstrap::GatewayMode;
use crate::error::HttpError;
use crate::relay;
use crate::state::AppState;

/// Stream a CMS-managed file back to the caller.
///
/// Registered for `/sites/{*path}` and `/api/proxy/sites/{*path}`; the
/// wildcard captures everything after `/sites/`.
pub async fn passthrough(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, HttpError> {
    let GatewayMode::Live(client) = &state.mode else {
        return Err(HttpError::NoOrigin);
    };

    debug!(target: "campusgate.assets", %path, "relaying managed file");
    let upstream = client
        .fetch_site_asset(&path, query.as_deref())
        .await
        .map_err(|err| {
            error!(target: "campusgate.assets", error = %err, %path, "asset fetch failed");
            HttpError::AssetProxy {
                details: err.to_string(),
            }
        })?;

    Ok(relay::streamed(upstream))
}
