//! Upstream HTTP client for the CMS.
//!
//! One shared `reqwest::Client` serves the GraphQL forward, the token
//! grant, and managed-file relays. Responses come back as raw
//! `reqwest::Response` so the HTTP surface can relay status and body
//! verbatim without re-parsing.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use campusgate_core::TokenSource;

use crate::endpoints::DrupalEndpoints;
use crate::error::DrupalResult;
use crate::oauth::{ClientCredentials, HttpTokenEndpoint};
use crate::token_cache::OauthTokenCache;

/// Upstream requests that outlive this are cut off rather than left
/// holding a gateway worker.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the headless CMS: GraphQL forwards and asset relays, with
/// the cached OAuth token attached when one is available.
pub struct DrupalClient {
    http: reqwest::Client,
    endpoints: DrupalEndpoints,
    tokens: Arc<dyn TokenSource>,
}

impl DrupalClient {
    /// Assemble a client with an explicit token source (tests, demo tools).
    pub fn new(http: reqwest::Client, base_url: &str, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http,
            endpoints: DrupalEndpoints::new(base_url),
            tokens,
        }
    }

    /// Wire the full live-mode stack: shared HTTP client plus the OAuth
    /// token cache pointed at `{base}/oauth/token`.
    pub fn connect(base_url: &str, credentials: ClientCredentials) -> DrupalResult<Self> {
        let http = build_http_client()?;
        let endpoints = DrupalEndpoints::new(base_url);
        let endpoint = HttpTokenEndpoint::new(http.clone(), &endpoints);
        let tokens = OauthTokenCache::new(Some(credentials), Arc::new(endpoint));
        Ok(Self::new(http, base_url, Arc::new(tokens)))
    }

    pub fn endpoints(&self) -> &DrupalEndpoints {
        &self.endpoints
    }

    /// Forward a GraphQL request body byte-for-byte.
    ///
    /// The caller's body is never parsed here; whatever JSON the front end
    /// sent is what the CMS sees. The `Authorization` header is attached
    /// only when the token cache yields a value.
    pub async fn execute(&self, body: Bytes) -> DrupalResult<reqwest::Response> {
        let mut request = self
            .http
            .post(self.endpoints.graphql_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);

        if let Some(token) = self.tokens.bearer_token().await {
            request = request.header(AUTHORIZATION, token);
        }

        Ok(request.send().await?)
    }

    /// Fetch a managed file under `/sites/` for streaming relay.
    pub async fn fetch_site_asset(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> DrupalResult<reqwest::Response> {
        let url = self.endpoints.site_asset_url(path, query);
        Ok(self.http.get(url).send().await?)
    }
}

/// The shared upstream client with the gateway's timeout policy.
pub fn build_http_client() -> DrupalResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
