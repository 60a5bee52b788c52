//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::bootstrap::GatewayContext;
use crate::cors::build_cors_layer;
use crate::handlers;
use crate::state::AppState;

/// Create the gateway router.
///
/// `GET /api/graphql` runs the same handler as `POST`; `OPTIONS` is
/// answered by the CORS layer. The two `/sites` routes relay the same
/// managed files, with and without the `/api/proxy` prefix.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for wildcards: `{*path}`
pub fn create_router(ctx: GatewayContext) -> Router {
    let cors = build_cors_layer(ctx.config.environment);
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/graphql",
            post(handlers::graphql::execute).get(handlers::graphql::execute),
        )
        .route("/api/status", get(handlers::status::report))
        .route("/sites/{*path}", get(handlers::assets::passthrough))
        .route(
            "/api/proxy/sites/{*path}",
            get(handlers::assets::passthrough),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
