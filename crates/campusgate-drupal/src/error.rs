//! Internal error types for upstream CMS operations.
//!
//! These errors stay inside the adapter. At the HTTP surface every one of
//! them collapses into either "continue unauthenticated" (token path) or
//! a synthesized 500 (forwarding path); callers never match on variants.

use thiserror::Error;

/// Result type alias for upstream CMS operations.
pub type DrupalResult<T> = Result<T, DrupalError>;

/// Errors talking to the headless CMS.
#[derive(Debug, Error)]
pub enum DrupalError {
    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("Token endpoint returned HTTP {status}")]
    TokenStatus {
        /// HTTP status code
        status: u16,
    },

    /// The token endpoint answered 2xx but the body was not a usable grant.
    #[error("Invalid token response: {0}")]
    TokenBody(#[from] serde_json::Error),

    /// The grant parsed but carried no usable `access_token`.
    #[error("Token response carried no access token")]
    MissingAccessToken,
}
