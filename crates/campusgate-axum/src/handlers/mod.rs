//! HTTP request handlers for the gateway.
//!
//! Each submodule covers one route family. Handlers are thin: mode
//! dispatch and relay live here, all policy lives in the library crates.

pub mod assets;
pub mod graphql;
pub mod status;
