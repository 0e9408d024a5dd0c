//! HTTP client for the TC11 site service
//!
//! Read-only: every call is a GET against the site's public endpoints.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

const DEFAULT_SITE_URL: &str = "http://localhost:8080";

/// HTTP client for communicating with the site service
#[derive(Clone)]
pub struct Tc11SiteClient {
    client: reqwest::Client,
    base_url: String,
}

impl Tc11SiteClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - TC11_SITE_URL: Base URL of the site service (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TC11_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());

        Self::new(&base_url)
    }

    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts currently served as the static fallback list
    pub async fn instagram_posts(&self) -> Result<String> {
        self.get_json("/instagram.json").await
    }

    /// Posts the aggregator returns right now
    pub async fn fresh_posts(&self) -> Result<String> {
        self.get_json("/instagram/fresh").await
    }

    pub async fn installations(&self) -> Result<String> {
        self.get_json("/installations.json").await
    }

    pub async fn installation(&self, name: &str) -> Result<String> {
        self.get_json(&installation_path(name)).await
    }

    /// Health and MCP surface status, combined
    pub async fn status(&self) -> Result<String> {
        let health: Value = serde_json::from_str(&self.get_json("/health").await?)
            .context("Invalid health response")?;
        let mcp: Value = serde_json::from_str(&self.get_json("/mcp").await?)
            .context("Invalid MCP status response")?;

        let combined = serde_json::json!({
            "site": self.base_url,
            "health": health,
            "mcp": mcp,
        });
        serde_json::to_string_pretty(&combined).context("Failed to encode status")
    }

    // --- Internal helpers ---

    async fn get_json(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }
}

fn installation_path(name: &str) -> String {
    format!("/installations/{}", urlencoding::encode(name.trim()))
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("Site error ({}): {}", status, body);
    }

    Ok(body)
}
