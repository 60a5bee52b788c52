#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for integration-test tooling
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod relay;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{GatewayContext, GatewayMode, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
