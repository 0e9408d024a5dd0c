//! TC11 MCP Server implementation
//!
//! Read-only tools over the site service's public endpoints.

use crate::client::Tc11SiteClient;
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// TC11 MCP Server
#[derive(Clone)]
pub struct Tc11Server {
    client: Tc11SiteClient,
    tool_router: ToolRouter<Self>,
}

impl Tc11Server {
    pub fn new(client: Tc11SiteClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InstallationParams {
    /// Installation name, case-insensitive (e.g. "Candie", "La Faluère")
    pub name: String,
}

fn into_tool_result(result: Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

#[tool_router]
impl Tc11Server {
    // === Instagram ===

    #[tool(
        description = "List the Instagram post URLs the site falls back to (the content of instagram.json)."
    )]
    async fn instagram_posts(&self) -> Result<CallToolResult, McpError> {
        into_tool_result(self.client.instagram_posts().await)
    }

    #[tool(
        description = "List the Instagram post URLs the RSS aggregator returns right now. Fails if the aggregator is down."
    )]
    async fn fresh_posts(&self) -> Result<CallToolResult, McpError> {
        into_tool_result(self.client.fresh_posts().await)
    }

    // === Installations ===

    #[tool(description = "List every TC11 tennis installation with coordinates, courts and surface.")]
    async fn installations(&self) -> Result<CallToolResult, McpError> {
        into_tool_result(self.client.installations().await)
    }

    #[tool(description = "Get one tennis installation by name.")]
    async fn installation(
        &self,
        params: Parameters<InstallationParams>,
    ) -> Result<CallToolResult, McpError> {
        into_tool_result(self.client.installation(&params.0.name).await)
    }

    // === Service ===

    #[tool(description = "Check that the site service is up and whether its MCP endpoint is enabled.")]
    async fn status(&self) -> Result<CallToolResult, McpError> {
        into_tool_result(self.client.status().await)
    }
}

#[tool_handler]
impl ServerHandler for Tc11Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tc11".into(),
                title: Some("TC11 MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"TC11 - Tennis Club du 11e site data

TOOLS:
- 'instagram_posts' - Posts listed in instagram.json
- 'fresh_posts' - Posts the aggregator returns right now
- 'installations' - All tennis installations
- 'installation' - One installation by name
- 'status' - Site service health

Set TC11_SITE_URL to point at a running site service (default http://localhost:8080)."#
                    .into(),
            ),
        }
    }
}
