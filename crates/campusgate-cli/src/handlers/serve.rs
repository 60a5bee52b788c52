//! Serve command handler.
//!
//! Prints a startup banner and hands off to the Axum adapter. Mode
//! selection (demo, live, or gated) happens inside `start_server`'s
//! bootstrap and is logged there.

use anyhow::Result;

use campusgate_axum::{ServerConfig, start_server};

/// Execute the serve command.
///
/// Runs until interrupted or the listener fails to bind.
pub async fn execute(host: String, port: u16, demo: bool) -> Result<()> {
    let config = ServerConfig {
        host,
        port,
        force_demo: demo,
    };

    println!();
    println!("  🚀 campusgate starting...");
    println!();
    println!("  🌐 Local:   http://localhost:{port}");
    println!("  🌐 Network: http://{}:{port}", config.host);
    if demo {
        println!();
        println!("  📦 Demo mode: serving bundled fixtures");
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
