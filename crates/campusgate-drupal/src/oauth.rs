//! OAuth2 client-credentials grant against the CMS.
//!
//! This module covers one round trip: POST the form-encoded grant request,
//! parse the response. Caching and expiry policy live in `token_cache`.
//! The endpoint is behind a trait so the cache can be tested with canned
//! grants and a call counter instead of a live OAuth server.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::endpoints::DrupalEndpoints;
use crate::error::{DrupalError, DrupalResult};

/// Grant lifetime assumed when the server does not send `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// OAuth consumer credentials from the environment.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// A parsed token-endpoint response.
///
/// Drupal's `simple_oauth` sends `expires_in` as a number, but other
/// OAuth front ends send it as a string; both are accepted. Unknown
/// fields (`refresh_token`, scopes) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub expires_in: Option<u64>,
}

impl GrantResponse {
    /// The ready-to-send `Authorization` value: `"{token_type} {token}"`,
    /// with the type defaulting to `Bearer` when absent or blank.
    pub fn header_value(&self) -> String {
        let token_type = self
            .token_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Bearer");
        format!("{token_type} {}", self.access_token)
    }

    /// Grant lifetime in seconds, defaulting when the server sent none.
    pub fn lifetime_secs(&self) -> u64 {
        self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
    }
}

/// Accept `3600`, `"3600"`, or nothing; unparseable strings count as absent.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(secs)) => Some(secs),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

// ============================================================================
// Token Endpoint
// ============================================================================

/// One client-credentials round trip against a token endpoint.
///
/// This is an implementation detail of the token cache; external code
/// consumes tokens through the `TokenSource` port.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Request a fresh grant.
    async fn request_token(&self, credentials: &ClientCredentials) -> DrupalResult<GrantResponse>;
}

/// Production endpoint: form-encoded POST to `{base}/oauth/token`.
pub struct HttpTokenEndpoint {
    http: reqwest::Client,
    token_url: String,
}

impl HttpTokenEndpoint {
    pub fn new(http: reqwest::Client, endpoints: &DrupalEndpoints) -> Self {
        Self {
            http,
            token_url: endpoints.token_url(),
        }
    }
}

#[async_trait]
impl TokenEndpoint for HttpTokenEndpoint {
    async fn request_token(&self, credentials: &ClientCredentials) -> DrupalResult<GrantResponse> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DrupalError::TokenStatus {
                status: status.as_u16(),
            });
        }

        // Parse from text rather than response.json() so a malformed body
        // surfaces as TokenBody, not a generic network error.
        let body = response.text().await?;
        let grant: GrantResponse = serde_json::from_str(&body)?;

        if grant.access_token.trim().is_empty() {
            return Err(DrupalError::MissingAccessToken);
        }

        Ok(grant)
    }
}

// ============================================================================
// Fake Endpoint for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_parses_numeric_expires_in() {
        let grant: GrantResponse = serde_json::from_str(
            r#"{"token_type":"Bearer","expires_in":3600,"access_token":"abc123"}"#,
        )
        .unwrap();

        assert_eq!(grant.access_token, "abc123");
        assert_eq!(grant.expires_in, Some(3600));
        assert_eq!(grant.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_grant_parses_string_expires_in() {
        let grant: GrantResponse =
            serde_json::from_str(r#"{"expires_in":"300","access_token":"abc123"}"#).unwrap();

        assert_eq!(grant.expires_in, Some(300));
    }

    #[test]
    fn test_unparseable_expires_in_falls_back_to_default() {
        let grant: GrantResponse =
            serde_json::from_str(r#"{"expires_in":"soon","access_token":"abc123"}"#).unwrap();

        assert_eq!(grant.expires_in, None);
        assert_eq!(grant.lifetime_secs(), DEFAULT_TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_missing_token_type_defaults_to_bearer() {
        let grant: GrantResponse =
            serde_json::from_str(r#"{"access_token":"abc123"}"#).unwrap();

        assert_eq!(grant.header_value(), "Bearer abc123");
        assert_eq!(grant.lifetime_secs(), DEFAULT_TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_custom_token_type_is_kept_verbatim() {
        let grant: GrantResponse =
            serde_json::from_str(r#"{"token_type":"MAC","access_token":"abc123"}"#).unwrap();

        assert_eq!(grant.header_value(), "MAC abc123");
    }

    #[test]
    fn test_blank_token_type_defaults_to_bearer() {
        let grant: GrantResponse =
            serde_json::from_str(r#"{"token_type":"  ","access_token":"abc123"}"#).unwrap();

        assert_eq!(grant.header_value(), "Bearer abc123");
    }
}
