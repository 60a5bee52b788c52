//! Check-config command handler.
//!
//! Reports which required environment variables are set, without ever
//! printing their values. Exits non-zero while live CMS traffic is
//! unconfigured and demo mode is off, so deploy scripts can gate on it.

use anyhow::Result;

use campusgate_core::{GatewayConfig, REQUIRED_VARS};

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-config command.
pub fn execute(json: bool) -> Result<()> {
    report(&GatewayConfig::from_env(), json)
}

/// Print a configuration verdict for an already-resolved snapshot.
///
/// Split from [`execute`] so tests can feed a lookup-built config
/// instead of mutating process env.
fn report(config: &GatewayConfig, json: bool) -> Result<()> {
    let status = config.status();

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{BOLD}Gateway configuration{RESET}\n");
        for name in REQUIRED_VARS {
            if status.missing_vars.contains(&name) {
                println!("  {RED}✗{RESET} {name:<32} not set");
            } else {
                println!("  {GREEN}✓{RESET} {name:<32} set");
            }
        }
        println!();
        println!(
            "  Environment: {}",
            if config.environment.is_development() {
                "development"
            } else {
                "production"
            }
        );
        println!("  Demo mode:   {}", config.demo_mode);
        println!();

        if config.demo_mode {
            println!("{GREEN}✓ Demo mode is on; the gateway serves bundled fixtures.{RESET}");
        } else if let Some(base_url) = &config.base_url
            && status.configured
        {
            println!("{GREEN}✓ Ready to forward to {base_url}{RESET}");
        } else {
            println!(
                "{RED}✗ Live CMS traffic is not configured; GraphQL requests will be gated.{RESET}"
            );
        }
    }

    if config.demo_mode || status.configured {
        Ok(())
    } else {
        anyhow::bail!("missing required variables: {}", status.missing_vars.join(", "))
    }
}
