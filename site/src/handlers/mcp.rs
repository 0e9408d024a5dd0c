//! MCP handlers
//!
//! A minimal MCP-compatible HTTP surface so coding agents can check the
//! server is up and register. Messages are acknowledged, not executed.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::AppState;

pub const PROTOCOL_VERSION: &str = "1.0";
pub const SERVER_NAME: &str = "tc11-mcp-server";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct McpCapabilities {
    pub tools: bool,
    pub resources: bool,
    pub prompts: bool,
}

impl McpCapabilities {
    fn all() -> Self {
        Self {
            tools: true,
            resources: true,
            prompts: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McpStatusResponse {
    pub status: &'static str,
    pub protocol_version: &'static str,
    pub enabled: bool,
    pub capabilities: McpCapabilities,
}

/// Incoming agent message. `params` is accepted and ignored.
///
/// `id` may be a string or a number and is echoed back unchanged.
#[derive(Debug, Deserialize)]
pub struct McpMessage {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<Value>,
}

#[derive(Serialize)]
pub struct McpResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<Value>,
    pub result: Option<McpResult>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum McpResult {
    Initialize {
        #[serde(rename = "serverName")]
        server_name: &'static str,
        #[serde(rename = "serverVersion")]
        server_version: &'static str,
        capabilities: McpCapabilities,
    },
    Tools {
        tools: Vec<Value>,
    },
    Resources {
        resources: Vec<Value>,
    },
    Prompts {
        prompts: Vec<Value>,
    },
    Ack {
        message: &'static str,
        #[serde(rename = "receivedType")]
        received_type: Option<String>,
    },
}

#[derive(Serialize)]
struct McpErrorResponse {
    status: &'static str,
    message: &'static str,
}

/// GET /mcp
pub async fn get_mcp_status(State(state): State<AppState>) -> Json<McpStatusResponse> {
    Json(McpStatusResponse {
        status: "ok",
        protocol_version: PROTOCOL_VERSION,
        enabled: state.config.mcp_enabled,
        capabilities: McpCapabilities::all(),
    })
}

/// POST /mcp
pub async fn post_mcp_message(
    State(state): State<AppState>,
    body: Result<Json<McpMessage>, JsonRejection>,
) -> Result<Response, AppError> {
    if !state.config.mcp_enabled {
        let body = McpErrorResponse {
            status: "error",
            message: "MCP server is disabled",
        };
        return Ok((StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response());
    }

    let Json(message) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::debug!("MCP message {:?} (id {:?})", message.kind, message.id);

    Ok(Json(respond(message)).into_response())
}

fn respond(message: McpMessage) -> McpResponse {
    let (kind, result) = match message.kind.as_deref() {
        Some("initialize") => (
            "initialize_result".to_string(),
            Some(McpResult::Initialize {
                server_name: SERVER_NAME,
                server_version: env!("CARGO_PKG_VERSION"),
                capabilities: McpCapabilities::all(),
            }),
        ),
        Some("ping") => ("pong".to_string(), None),
        Some("tools/list") => (
            "tools/list_result".to_string(),
            Some(McpResult::Tools { tools: Vec::new() }),
        ),
        Some("resources/list") => (
            "resources/list_result".to_string(),
            Some(McpResult::Resources {
                resources: Vec::new(),
            }),
        ),
        Some("prompts/list") => (
            "prompts/list_result".to_string(),
            Some(McpResult::Prompts {
                prompts: Vec::new(),
            }),
        ),
        _ => (
            "ack".to_string(),
            Some(McpResult::Ack {
                message: "Message received",
                received_type: message.kind.clone(),
            }),
        ),
    };

    McpResponse {
        kind,
        id: message.id,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: Option<&str>, id: &str) -> McpMessage {
        McpMessage {
            kind: kind.map(str::to_string),
            id: Some(Value::from(id)),
        }
    }

    fn to_json(response: McpResponse) -> Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn initialize_reports_server_identity() {
        let json = to_json(respond(message(Some("initialize"), "1")));

        assert_eq!(json["type"], "initialize_result");
        assert_eq!(json["id"], "1");
        assert_eq!(json["result"]["serverName"], "tc11-mcp-server");
        assert_eq!(json["result"]["capabilities"]["tools"], true);
    }

    #[test]
    fn numeric_id_is_echoed_as_a_number() {
        let message: McpMessage =
            serde_json::from_value(serde_json::json!({ "type": "ping", "id": 1 })).unwrap();
        let json = to_json(respond(message));

        assert_eq!(json["type"], "pong");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn missing_id_is_null() {
        let message: McpMessage =
            serde_json::from_value(serde_json::json!({ "type": "ping" })).unwrap();
        let json = to_json(respond(message));

        assert!(json["id"].is_null());
    }

    #[test]
    fn ping_has_null_result() {
        let json = to_json(respond(message(Some("ping"), "2")));

        assert_eq!(json["type"], "pong");
        assert!(json["result"].is_null());
    }

    #[test]
    fn list_requests_return_empty_lists() {
        let tools = to_json(respond(message(Some("tools/list"), "3")));
        let resources = to_json(respond(message(Some("resources/list"), "4")));
        let prompts = to_json(respond(message(Some("prompts/list"), "5")));

        assert_eq!(tools["type"], "tools/list_result");
        assert_eq!(tools["result"]["tools"], serde_json::json!([]));
        assert_eq!(resources["type"], "resources/list_result");
        assert_eq!(resources["result"]["resources"], serde_json::json!([]));
        assert_eq!(prompts["type"], "prompts/list_result");
        assert_eq!(prompts["result"]["prompts"], serde_json::json!([]));
    }

    #[test]
    fn unknown_type_is_acknowledged() {
        let json = to_json(respond(message(Some("notifications/initialized"), "6")));

        assert_eq!(json["type"], "ack");
        assert_eq!(json["result"]["message"], "Message received");
        assert_eq!(json["result"]["receivedType"], "notifications/initialized");
    }

    #[test]
    fn missing_type_is_acknowledged_with_null() {
        let json = to_json(respond(message(None, "7")));

        assert_eq!(json["type"], "ack");
        assert!(json["result"]["receivedType"].is_null());
    }
}
