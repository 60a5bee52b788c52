#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod endpoints;
mod error;
mod oauth;
mod token_cache;

// ============================================================================
// Public API
// ============================================================================

// Upstream client
pub use client::DrupalClient;

// Endpoint URLs
pub use endpoints::DrupalEndpoints;

// Errors
pub use error::{DrupalError, DrupalResult};

// OAuth grant
pub use oauth::{ClientCredentials, GrantResponse, HttpTokenEndpoint, TokenEndpoint};

// Token cache
pub use token_cache::{CachedToken, EXPIRY_MARGIN_SECS, OauthTokenCache};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
