//! Query command handler.
//!
//! Runs one of the site's canonical GraphQL documents through the same
//! mode ladder the HTTP surface uses: fixtures in demo mode, the CMS
//! origin in live mode. The response JSON goes to stdout, so the output
//! pipes straight into `jq`.

use anyhow::Result;
use bytes::Bytes;
use serde_json::Value;

use campusgate_axum::{GatewayContext, GatewayMode};
use campusgate_core::{GraphqlRequest, QueryTarget};

/// Execute the query command.
///
/// `path` fills the `$path` variable; it is mandatory for route lookups
/// and optional elsewhere (demo mode resolves any exact path first, the
/// CMS ignores undeclared variables).
pub async fn execute(ctx: &GatewayContext, target: QueryTarget, path: Option<&str>) -> Result<()> {
    let request = build_request(target, path)?;

    let response = match &ctx.mode {
        GatewayMode::Demo(mock) => mock.respond(&serde_json::to_string(&request)?),
        GatewayMode::Live(client) => {
            let upstream = client.execute(Bytes::from(request.to_body())).await?;
            let status = upstream.status();
            if !status.is_success() {
                eprintln!("upstream answered {status}");
            }
            upstream.json::<Value>().await?
        }
        GatewayMode::Unconfigured => anyhow::bail!(
            "the CMS is not configured (missing {}); set the variables or pass --demo",
            ctx.config.missing_vars().join(", ")
        ),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn build_request(target: QueryTarget, path: Option<&str>) -> Result<GraphqlRequest> {
    match path {
        Some(path) => Ok(GraphqlRequest::with_path(target.document(), path)),
        None if target.requires_path() => {
            anyhow::bail!("the route query needs --path (e.g. --path /programs/nursing)")
        }
        None => Ok(GraphqlRequest::new(target.document())),
    }
}
