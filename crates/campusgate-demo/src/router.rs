//! Mock query routing.
//!
//! Demo mode has no GraphQL executor; it pattern-matches the request
//! instead. Matching is two-phase:
//!
//! 1. If `variables.path` names an entry in the routes fixture, that
//!    entry wins outright - detail pages beat every listing probe.
//! 2. Otherwise the first substring probe against the query text wins,
//!    in a fixed order (homepage, programs, featured programs, faculty,
//!    events, news).
//!
//! Anything unrecognized gets `{ "data": {} }`, and a body that does not
//! parse gets an error envelope. Demo mode never fails a request.

use serde_json::{Value, json};
use tracing::debug;

use crate::fixtures::FixtureSet;

/// How many programs the featured variant serves.
pub const FEATURED_LIMIT: usize = 3;

/// `errors[0].message` when the request body cannot be interpreted.
pub const MOCK_ERROR_MESSAGE: &str = "Mock data error";

/// Answers GraphQL requests from the fixture set.
#[derive(Debug, Clone)]
pub struct MockRouter {
    fixtures: FixtureSet,
}

impl MockRouter {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self { fixtures }
    }

    /// A router over the fixtures compiled into this binary.
    pub fn builtin() -> crate::fixtures::DemoResult<Self> {
        Ok(Self::new(FixtureSet::builtin()?))
    }

    /// Produce the demo response for a raw request body.
    ///
    /// Always returns a serveable JSON value; the caller turns it into a
    /// 200 with the demo-mode marker header.
    pub fn respond(&self, raw_body: &str) -> Value {
        let Ok(body) = serde_json::from_str::<Value>(raw_body) else {
            return error_envelope();
        };
        let Some(query) = body.get("query").and_then(Value::as_str) else {
            return error_envelope();
        };

        // Exact detail lookup first: a known path wins even when the query
        // text would also match a listing probe.
        if let Some(path) = body.pointer("/variables/path").and_then(Value::as_str)
            && let Some(entry) = self.fixtures.routes.get(path)
        {
            debug!(target: "campusgate.demo", path, "serving route fixture");
            return entry.clone();
        }

        if query.contains("GetHomepageData") || query.contains("nodeHomepages") {
            debug!(target: "campusgate.demo", "serving homepage fixture");
            return self.fixtures.homepage.clone();
        }

        // The featured document also contains the `nodePrograms` field, so
        // the generic probe must not swallow it.
        if query.contains("GetPrograms")
            || (query.contains("nodePrograms")
                && !query.contains("route")
                && !query.contains("GetFeaturedPrograms"))
        {
            debug!(target: "campusgate.demo", "serving programs fixture");
            return self.fixtures.programs.clone();
        }

        if query.contains("GetFeaturedPrograms") {
            debug!(target: "campusgate.demo", "serving featured programs");
            return self.featured_programs();
        }

        if query.contains("GetFaculty") || query.contains("nodeFaculties") {
            debug!(target: "campusgate.demo", "serving faculty fixture");
            return self.fixtures.faculty.clone();
        }

        if query.contains("GetEvents")
            || query.contains("GetUpcomingEvents")
            || query.contains("nodeEvents")
        {
            debug!(target: "campusgate.demo", "serving events fixture");
            return self.fixtures.events.clone();
        }

        if query.contains("GetNews")
            || query.contains("GetFeaturedNews")
            || query.contains("nodeNewsItems")
        {
            debug!(target: "campusgate.demo", "serving news fixture");
            return self.fixtures.news.clone();
        }

        debug!(target: "campusgate.demo", "query matched no fixture");
        json!({ "data": {} })
    }

    /// The programs fixture truncated to the first `FEATURED_LIMIT` nodes,
    /// built on a copy - the stored fixture is never mutated.
    fn featured_programs(&self) -> Value {
        let mut featured = self.fixtures.programs.clone();
        if let Some(nodes) = featured
            .pointer_mut("/data/nodePrograms/nodes")
            .and_then(Value::as_array_mut)
        {
            nodes.truncate(FEATURED_LIMIT);
        }
        featured
    }
}

fn error_envelope() -> Value {
    json!({
        "data": {},
        "errors": [{ "message": MOCK_ERROR_MESSAGE }],
    })
}
