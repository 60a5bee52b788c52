//! GraphQL wire shapes shared by the HTTP surface and the CLI.
//!
//! The gateway treats query documents as opaque text; these types cover the
//! request body it forwards and the error envelopes it synthesizes itself.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// `extensions.code` of the not-configured-yet envelope.
pub const CONFIGURATION_REQUIRED_CODE: &str = "CONFIGURATION_REQUIRED";

/// Human-readable message of the not-configured-yet envelope.
pub const CONFIGURATION_REQUIRED_MESSAGE: &str =
    "Decoupled Drupal is not configured yet. Please set up your environment variables.";

/// A GraphQL request body: `{ "query": ..., "variables": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphqlRequest {
    /// A request with no variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// A request carrying the `$path` variable the detail queries take.
    pub fn with_path(query: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Some(json!({ "path": path.into() })),
        }
    }

    /// Serialized body bytes, ready to POST.
    pub fn to_body(&self) -> Vec<u8> {
        // A struct of String + Value cannot fail to serialize.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// The 200-with-errors envelope returned while required environment
/// variables are missing.
///
/// Clients key off `extensions.code == "CONFIGURATION_REQUIRED"` and show
/// `extensions.missingVars` in their setup guide.
pub fn configuration_required_envelope(missing_vars: &[&str]) -> Value {
    json!({
        "data": null,
        "errors": [{
            "message": CONFIGURATION_REQUIRED_MESSAGE,
            "extensions": {
                "code": CONFIGURATION_REQUIRED_CODE,
                "missingVars": missing_vars,
            },
        }],
    })
}
