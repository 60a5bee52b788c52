//! Command handlers.
//!
//! This module contains the command execution logic for CLI commands.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call into the gateway crates
//!   3. Format output for the terminal
//!
//! Mode selection and the CMS client live in `campusgate-axum`'s
//! bootstrap; handlers never read the environment themselves.

pub mod check_config;
pub mod query;
pub mod serve;
