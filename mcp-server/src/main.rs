//! TC11 MCP Server
//!
//! Gives coding agents read-only access to the TC11 site: the Instagram posts
//! behind the grid, the tennis installations on the map and the service health.
//! Every tool is a thin call to the site service's HTTP endpoints.

mod client;
mod server;

use anyhow::{Context, Result};
use client::Tc11SiteClient;
use rmcp::ServiceExt;
use server::Tc11Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // MCP frames go over stdout, logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = Tc11SiteClient::from_env().context("Failed to build site client")?;
    tracing::info!("TC11 MCP server reading from {}", client.base_url());

    let service = Tc11Server::new(client)
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .context("Failed to start stdio transport")?;

    service.waiting().await?;
    tracing::info!("TC11 MCP server stopped");

    Ok(())
}
