//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the gateway expects from infrastructure without
//! naming an implementation. Adapter crates provide the real versions;
//! tests provide fakes.

pub mod token_source;

pub use token_source::TokenSource;
