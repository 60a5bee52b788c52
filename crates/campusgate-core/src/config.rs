//! Gateway configuration resolved from the environment.
//!
//! The variable names are inherited from the decoupled-site deployment and
//! are part of the external interface - hosting dashboards and `.env` files
//! already use them, so they keep their original spelling here.
//!
//! # Design
//!
//! - Environment is read once at startup into a plain struct; nothing else
//!   touches `std::env`
//! - `from_lookup` is the pure seam: tests pass a closure over a map instead
//!   of mutating process env
//! - Missing configuration is a *status*, not an error - the HTTP surface
//!   answers with a well-formed `CONFIGURATION_REQUIRED` envelope instead of
//!   failing opaquely

use serde::Serialize;

/// Base URL of the headless Drupal installation (no trailing slash needed).
pub const ENV_DRUPAL_BASE_URL: &str = "NEXT_PUBLIC_DRUPAL_BASE_URL";
/// OAuth consumer ID for the client-credentials grant.
pub const ENV_DRUPAL_CLIENT_ID: &str = "DRUPAL_CLIENT_ID";
/// OAuth consumer secret for the client-credentials grant.
pub const ENV_DRUPAL_CLIENT_SECRET: &str = "DRUPAL_CLIENT_SECRET";
/// `"true"` (exactly) serves bundled fixtures instead of touching the CMS.
pub const ENV_DEMO_MODE: &str = "NEXT_PUBLIC_DEMO_MODE";
/// `"development"` relaxes CORS to allow any origin.
pub const ENV_NODE_ENV: &str = "NODE_ENV";

/// The variables that must be set before live CMS traffic is possible,
/// in the order they are reported back to the caller.
pub const REQUIRED_VARS: [&str; 3] = [
    ENV_DRUPAL_BASE_URL,
    ENV_DRUPAL_CLIENT_ID,
    ENV_DRUPAL_CLIENT_SECRET,
];

/// Scaffold `.env` files ship values like `https://your-site.ddev.site`;
/// anything still carrying this marker counts as unset.
const PLACEHOLDER_MARKER: &str = "your-";

/// Deployment environment, derived from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// `NODE_ENV=development`: CORS allows any origin.
    Development,
    /// Everything else (including unset): CORS is same-origin only.
    Production,
}

impl Environment {
    /// Map a raw `NODE_ENV` value; anything but `"development"` is treated
    /// as production.
    pub fn from_node_env(raw: Option<&str>) -> Self {
        if raw == Some("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Everything the gateway reads from the environment, resolved once.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// CMS base URL, e.g. `https://cms.meridianstate.edu`. `None` when the
    /// variable is unset, empty, or still a scaffold placeholder.
    pub base_url: Option<String>,
    /// OAuth consumer ID.
    pub client_id: Option<String>,
    /// OAuth consumer secret.
    pub client_secret: Option<String>,
    /// Serve bundled fixtures instead of the CMS.
    pub demo_mode: bool,
    /// Governs the CORS policy.
    pub environment: Environment,
}

impl GatewayConfig {
    /// Resolve from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve from an arbitrary lookup function.
    ///
    /// This is the testing seam: unit tests pass a closure over a map and
    /// never mutate process env (which is racy under the parallel test
    /// runner).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: configured_value(lookup(ENV_DRUPAL_BASE_URL)),
            client_id: configured_value(lookup(ENV_DRUPAL_CLIENT_ID)),
            client_secret: configured_value(lookup(ENV_DRUPAL_CLIENT_SECRET)),
            demo_mode: lookup(ENV_DEMO_MODE).as_deref() == Some("true"),
            environment: Environment::from_node_env(lookup(ENV_NODE_ENV).as_deref()),
        }
    }

    /// The required variables that are still unset, in reporting order.
    ///
    /// Empty means live CMS traffic is fully configured.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.is_none() {
            missing.push(ENV_DRUPAL_BASE_URL);
        }
        if self.client_id.is_none() {
            missing.push(ENV_DRUPAL_CLIENT_ID);
        }
        if self.client_secret.is_none() {
            missing.push(ENV_DRUPAL_CLIENT_SECRET);
        }
        missing
    }

    /// Whether all required variables are present.
    pub fn is_configured(&self) -> bool {
        self.missing_vars().is_empty()
    }

    /// Snapshot for the status endpoint and the `check-config` command.
    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            configured: self.is_configured(),
            demo_mode: self.demo_mode,
            environment: self.environment,
            missing_vars: self.missing_vars(),
        }
    }
}

/// Serializable verdict on the current configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    /// All required variables present (live CMS traffic possible).
    pub configured: bool,
    /// Fixture mode is on; the CMS is never contacted.
    pub demo_mode: bool,
    /// Current deployment environment.
    pub environment: Environment,
    /// Required variables still unset, in reporting order.
    pub missing_vars: Vec<&'static str>,
}

/// Treat empty and scaffold-placeholder values as unset.
fn configured_value(raw: Option<String>) -> Option<String> {
    let value = raw?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(PLACEHOLDER_MARKER) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn fully_configured() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_DRUPAL_BASE_URL, "https://cms.meridianstate.edu"),
            (ENV_DRUPAL_CLIENT_ID, "campusgate"),
            (ENV_DRUPAL_CLIENT_SECRET, "s3cret"),
        ]
    }

    #[test]
    fn test_empty_env_reports_all_vars_missing() {
        let config = GatewayConfig::from_lookup(|_| None);

        assert!(!config.is_configured());
        assert_eq!(config.missing_vars(), REQUIRED_VARS.to_vec());
        assert!(!config.demo_mode);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_fully_configured_has_no_missing_vars() {
        let config = GatewayConfig::from_lookup(lookup_from(&fully_configured()));

        assert!(config.is_configured());
        assert!(config.missing_vars().is_empty());
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://cms.meridianstate.edu")
        );
    }

    #[test]
    fn test_missing_vars_reports_only_unset_names() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(
            ENV_DRUPAL_BASE_URL,
            "https://cms.meridianstate.edu",
        )]));

        assert_eq!(
            config.missing_vars(),
            vec![ENV_DRUPAL_CLIENT_ID, ENV_DRUPAL_CLIENT_SECRET]
        );
    }

    #[test]
    fn test_placeholder_values_count_as_unset() {
        let mut pairs = fully_configured();
        pairs[0] = (ENV_DRUPAL_BASE_URL, "https://your-site.ddev.site");
        let config = GatewayConfig::from_lookup(lookup_from(&pairs));

        assert_eq!(config.missing_vars(), vec![ENV_DRUPAL_BASE_URL]);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let mut pairs = fully_configured();
        pairs[1] = (ENV_DRUPAL_CLIENT_ID, "   ");
        let config = GatewayConfig::from_lookup(lookup_from(&pairs));

        assert_eq!(config.missing_vars(), vec![ENV_DRUPAL_CLIENT_ID]);
    }

    #[test]
    fn test_demo_mode_requires_exact_true() {
        let on = GatewayConfig::from_lookup(lookup_from(&[(ENV_DEMO_MODE, "true")]));
        let caps = GatewayConfig::from_lookup(lookup_from(&[(ENV_DEMO_MODE, "TRUE")]));
        let one = GatewayConfig::from_lookup(lookup_from(&[(ENV_DEMO_MODE, "1")]));

        assert!(on.demo_mode);
        assert!(!caps.demo_mode);
        assert!(!one.demo_mode);
    }

    #[test]
    fn test_environment_from_node_env() {
        assert_eq!(
            Environment::from_node_env(Some("development")),
            Environment::Development
        );
        assert_eq!(
            Environment::from_node_env(Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_node_env(Some("test")),
            Environment::Production
        );
        assert_eq!(Environment::from_node_env(None), Environment::Production);
    }

    #[test]
    fn test_status_snapshot_matches_config() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            (ENV_DEMO_MODE, "true"),
            (ENV_NODE_ENV, "development"),
        ]));
        let status = config.status();

        assert!(!status.configured);
        assert!(status.demo_mode);
        assert_eq!(status.environment, Environment::Development);
        assert_eq!(status.missing_vars, REQUIRED_VARS.to_vec());
    }

    #[test]
    fn test_status_serializes_camel_case() {
        let config = GatewayConfig::from_lookup(|_| None);
        let json = serde_json::to_value(config.status()).unwrap();

        assert_eq!(json["configured"], false);
        assert_eq!(json["demoMode"], false);
        assert_eq!(json["environment"], "production");
        assert_eq!(json["missingVars"][0], ENV_DRUPAL_BASE_URL);
    }
}
