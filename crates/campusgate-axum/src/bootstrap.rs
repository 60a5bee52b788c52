//! Gateway bootstrap - the composition root.
//!
//! This module is the only place where infrastructure is wired together
//! for the HTTP adapter: the environment is read once, the gateway mode
//! is decided, and the Drupal client or the mock router is constructed.

use anyhow::Result;
use tracing::{info, warn};

use campusgate_core::GatewayConfig;
use campusgate_demo::MockRouter;
use campusgate_drupal::{ClientCredentials, DrupalClient};

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Force demo mode regardless of `NEXT_PUBLIC_DEMO_MODE`.
    pub force_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            force_demo: false,
        }
    }
}

/// The gateway's resolved operating mode.
///
/// Deciding this once at startup keeps the per-request ladder a plain
/// `match`; handlers cannot see a half-configured state.
pub enum GatewayMode {
    /// Serve bundled fixtures; the CMS is never contacted.
    Demo(MockRouter),
    /// Forward to the configured CMS origin.
    Live(DrupalClient),
    /// Required variables are missing: GraphQL requests get the
    /// configuration-required envelope until the environment is fixed.
    Unconfigured,
}

/// Application context for the Axum adapter.
pub struct GatewayContext {
    /// Environment snapshot taken at startup.
    pub config: GatewayConfig,
    /// Demo, live, or gated.
    pub mode: GatewayMode,
}

impl GatewayContext {
    /// Wire the gateway for an already-resolved configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mode = if config.demo_mode {
            info!(target: "campusgate", "demo mode: serving bundled fixtures");
            GatewayMode::Demo(MockRouter::builtin()?)
        } else if let (Some(base_url), Some(client_id), Some(client_secret)) =
            (&config.base_url, &config.client_id, &config.client_secret)
        {
            info!(target: "campusgate", base_url = %base_url, "live mode: forwarding to CMS origin");
            let credentials = ClientCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            };
            GatewayMode::Live(DrupalClient::connect(base_url, credentials)?)
        } else {
            warn!(
                target: "campusgate",
                missing = ?config.missing_vars(),
                "CMS is not configured; GraphQL requests will be gated"
            );
            GatewayMode::Unconfigured
        };

        Ok(Self { config, mode })
    }
}

/// Bootstrap a gateway context from the process environment.
pub fn bootstrap(config: &ServerConfig) -> Result<GatewayContext> {
    let mut gateway_config = GatewayConfig::from_env();
    if config.force_demo {
        gateway_config.demo_mode = true;
    }
    GatewayContext::new(gateway_config)
}

/// Start the web server on the configured address.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("campusgate listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
