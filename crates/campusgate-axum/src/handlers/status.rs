//! Configuration status endpoint.

use axum::Json;
use axum::extract::State;

use campusgate_core::ConfigStatus;

use crate::state::AppState;

/// Report which required variables are set and which mode is active.
///
/// Setup dashboards poll this; it never exposes configured values, only
/// the names of variables that are still missing.
pub async fn report(State(state): State<AppState>) -> Json<ConfigStatus> {
    Json(state.config.status())
}
