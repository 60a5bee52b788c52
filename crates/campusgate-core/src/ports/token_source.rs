//! Token source port for outbound CMS authentication.

use async_trait::async_trait;

/// Supplies the `Authorization` header value for upstream CMS requests.
///
/// Returning `None` is not an error: the caller proceeds unauthenticated
/// and lets the CMS decide what anonymous access may see. Implementations
/// own their caching and refresh policy.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// A ready-to-send header value (e.g. `"Bearer 3f9a..."`), or `None`
    /// when no token is available.
    async fn bearer_token(&self) -> Option<String>;
}
