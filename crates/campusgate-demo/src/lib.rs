#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod fixtures;
mod router;

// ============================================================================
// Public API
// ============================================================================

pub use fixtures::{DemoError, DemoResult, FixtureSet};
pub use router::{FEATURED_LIMIT, MOCK_ERROR_MESSAGE, MockRouter};
