//! CLI entry point - the composition root.
//!
//! Environment loading and logging are set up once here; command
//! dispatch routes to handlers. The gateway context for in-process
//! queries is built by the same bootstrap the HTTP server uses.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use campusgate_axum::{ServerConfig, bootstrap};
use campusgate_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the default filter
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { host, port, demo } => {
            handlers::serve::execute(host, port, demo).await?;
        }
        Commands::CheckConfig { json } => {
            handlers::check_config::execute(json)?;
        }
        Commands::Query { target, path, demo } => {
            let config = ServerConfig {
                force_demo: demo,
                ..ServerConfig::default()
            };
            let ctx = bootstrap(&config)?;
            handlers::query::execute(&ctx, target.target(), path.as_deref()).await?;
        }
    }

    Ok(())
}
