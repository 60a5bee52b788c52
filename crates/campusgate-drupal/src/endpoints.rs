//! CMS endpoint URL building.
//!
//! Pure string construction so the hot paths never re-derive URLs and
//! tests can pin the exact shapes. The base URL arrives straight from
//! `NEXT_PUBLIC_DRUPAL_BASE_URL`; a trailing slash there must not produce
//! `//graphql`.

/// Well-known endpoints of a headless Drupal installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrupalEndpoints {
    base: String,
}

impl DrupalEndpoints {
    /// Build from the configured base URL, e.g. `https://cms.example.edu`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The GraphQL endpoint the gateway forwards to.
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base)
    }

    /// The OAuth token endpoint for the client-credentials grant.
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base)
    }

    /// A managed-file URL under `/sites/` (images, documents).
    ///
    /// `path` is the remainder after `/sites/`, with or without a leading
    /// slash; `query` is the raw query string, when the caller had one.
    pub fn site_asset_url(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query {
            Some(query) if !query.is_empty() => {
                format!("{}/sites/{path}?{query}", self.base)
            }
            _ => format!("{}/sites/{path}", self.base),
        }
    }
}
