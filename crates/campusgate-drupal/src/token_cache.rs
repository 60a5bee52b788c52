//! In-process OAuth token cache.
//!
//! One token per gateway process, refreshed 60 seconds ahead of expiry so
//! a token never goes stale mid-request. The mutex is held across the
//! refresh; concurrent cache misses coalesce into a single grant request
//! instead of stampeding the token endpoint.
//!
//! Failure policy: a failed grant logs a warning and yields `None`. The
//! calling request proceeds unauthenticated and the next request retries.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use campusgate_core::TokenSource;

use crate::error::{DrupalError, DrupalResult};
use crate::oauth::{ClientCredentials, TokenEndpoint};

/// Tokens are treated as expired this many seconds before they really are.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// A cached `Authorization` value with its expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    /// Full header value, e.g. `"Bearer 3f9a..."`.
    pub value: String,
    /// Instant the grant expires, per the server's `expires_in`.
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Usable at `now`? False once inside the safety margin: a token with
    /// 60 seconds or less remaining already counts as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS)
    }
}

/// Client-credentials token cache implementing the `TokenSource` port.
pub struct OauthTokenCache {
    credentials: Option<ClientCredentials>,
    endpoint: Arc<dyn TokenEndpoint>,
    cached: Mutex<Option<CachedToken>>,
}

impl OauthTokenCache {
    /// `credentials: None` builds a cache that always yields `None`
    /// without contacting the endpoint (unconfigured deployments).
    pub fn new(credentials: Option<ClientCredentials>, endpoint: Arc<dyn TokenEndpoint>) -> Self {
        Self {
            credentials,
            endpoint,
            cached: Mutex::new(None),
        }
    }

    async fn refresh(&self, credentials: &ClientCredentials) -> DrupalResult<CachedToken> {
        let grant = self.endpoint.request_token(credentials).await?;
        if grant.access_token.trim().is_empty() {
            return Err(DrupalError::MissingAccessToken);
        }

        // Checked arithmetic: expires_in is server-controlled and a broken
        // server must not be able to panic the gateway.
        let lifetime = Duration::try_seconds(i64::try_from(grant.lifetime_secs()).unwrap_or(i64::MAX))
            .unwrap_or_else(Duration::zero);
        let expires_at = Utc::now()
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(CachedToken {
            value: grant.header_value(),
            expires_at,
        })
    }
}

#[async_trait]
impl TokenSource for OauthTokenCache {
    async fn bearer_token(&self) -> Option<String> {
        let credentials = self.credentials.as_ref()?;

        let mut slot = self.cached.lock().await;
        if let Some(token) = slot.as_ref()
            && token.is_fresh(Utc::now())
        {
            return Some(token.value.clone());
        }

        match self.refresh(credentials).await {
            Ok(token) => {
                debug!(
                    target: "campusgate.oauth",
                    expires_at = %token.expires_at,
                    "obtained CMS access token"
                );
                let value = token.value.clone();
                *slot = Some(token);
                Some(value)
            }
            Err(error) => {
                // Keep whatever was cached; the next request retries.
                warn!(
                    target: "campusgate.oauth",
                    %error,
                    "token grant failed; continuing unauthenticated"
                );
                None
            }
        }
    }
}
