//! Bundled fixture data.
//!
//! The JSON files under `fixtures/` are embedded at compile time and
//! parsed once at startup, so a malformed fixture fails the boot instead
//! of the first request that happens to hit it.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for demo-mode setup.
pub type DemoResult<T> = Result<T, DemoError>;

/// Errors loading the bundled fixtures.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A bundled fixture file is not valid JSON.
    #[error("Bundled fixture '{name}' is not valid JSON: {source}")]
    InvalidFixture {
        /// Fixture file stem, e.g. `programs`.
        name: &'static str,
        source: serde_json::Error,
    },

    /// The routes fixture must be an object keyed by path.
    #[error("Bundled fixture 'routes' must be a JSON object keyed by path")]
    RoutesShape,
}

/// All demo responses, parsed and ready to serve.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    /// `GetHomepageData` response.
    pub homepage: Value,
    /// Full `GetPrograms` response; the featured variant is derived from it.
    pub programs: Value,
    /// `GetFaculty` response.
    pub faculty: Value,
    /// `GetEvents` / `GetUpcomingEvents` response.
    pub events: Value,
    /// `GetNews` / `GetFeaturedNews` response.
    pub news: Value,
    /// Map of path to a complete detail envelope, consulted before any
    /// query-text matching.
    pub routes: Value,
}

impl FixtureSet {
    /// Parse the fixtures compiled into this binary.
    pub fn builtin() -> DemoResult<Self> {
        let set = Self {
            homepage: parse_fixture("homepage", include_str!("../fixtures/homepage.json"))?,
            programs: parse_fixture("programs", include_str!("../fixtures/programs.json"))?,
            faculty: parse_fixture("faculty", include_str!("../fixtures/faculty.json"))?,
            events: parse_fixture("events", include_str!("../fixtures/events.json"))?,
            news: parse_fixture("news", include_str!("../fixtures/news.json"))?,
            routes: parse_fixture("routes", include_str!("../fixtures/routes.json"))?,
        };

        if !set.routes.is_object() {
            return Err(DemoError::RoutesShape);
        }
        Ok(set)
    }
}

fn parse_fixture(name: &'static str, raw: &str) -> DemoResult<Value> {
    serde_json::from_str(raw).map_err(|source| DemoError::InvalidFixture { name, source })
}
