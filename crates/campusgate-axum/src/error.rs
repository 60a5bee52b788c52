//! HTTP-surface error types and their response mappings.
//!
//! Only transport-level failures become `HttpError`. Missing
//! configuration is deliberately NOT an error here: the gate answers
//! with a 200-status GraphQL envelope so browser clients render the
//! message instead of treating it as a network fault.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failures the HTTP surface reports as error responses.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The upstream GraphQL endpoint could not be reached, or died
    /// mid-response.
    #[error("Failed to proxy GraphQL request: {details}")]
    GraphqlProxy { details: String },

    /// A managed-file relay failed in transit.
    #[error("Failed to proxy asset request: {details}")]
    AssetProxy { details: String },

    /// An asset was requested while no CMS origin is configured
    /// (demo mode, or required variables unset).
    #[error("No upstream origin is configured")]
    NoOrigin,
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            HttpError::GraphqlProxy { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to proxy GraphQL request".to_string(),
                Some(details),
            ),
            HttpError::AssetProxy { details } => (
                StatusCode::BAD_GATEWAY,
                "Failed to proxy asset request".to_string(),
                Some(details),
            ),
            HttpError::NoOrigin => (StatusCode::NOT_FOUND, self.to_string(), None),
        };

        let body = ErrorBody {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
