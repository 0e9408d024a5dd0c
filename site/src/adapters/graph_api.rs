//! Instagram Graph API adapter
//!
//! Recent media of a Business account. Needs an access token and the account ID.
//!
//! See <https://developers.facebook.com/docs/instagram-api/>

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::adapters::lenient::{lenient_objects, lenient_string};
use crate::domain::entities::{PostRef, MAX_POSTS};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

pub const GRAPH_API_BASE: &str = "https://graph.facebook.com/v21.0";
const MEDIA_FIELDS: &str = "id,caption,media_type,media_url,permalink,thumbnail_url,timestamp";

pub struct GraphApiSource {
    http: Client,
    base_url: String,
    access_token: String,
    account_id: String,
}

impl GraphApiSource {
    pub fn new(http: Client, access_token: String, account_id: String) -> Self {
        Self {
            http,
            base_url: GRAPH_API_BASE.to_string(),
            access_token,
            account_id,
        }
    }

    fn media_url(&self) -> String {
        format!(
            "{}/{}/media?fields={}&limit={}&access_token={}",
            self.base_url,
            encode(&self.account_id),
            encode(MEDIA_FIELDS),
            MAX_POSTS,
            encode(&self.access_token)
        )
    }
}

#[derive(Deserialize)]
struct MediaResponse {
    #[serde(default, deserialize_with = "lenient_objects")]
    data: Vec<MediaItem>,
}

#[derive(Deserialize)]
struct MediaItem {
    #[serde(default, deserialize_with = "lenient_string")]
    permalink: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<GraphError>,
}

#[derive(Deserialize)]
struct GraphError {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<i64>,
}

/// Permalinks of a media listing. Invalid JSON or a missing `data` array yields
/// nothing; malformed entries are skipped one by one.
pub fn parse_media_response(body: &str) -> Vec<PostRef> {
    match serde_json::from_str::<MediaResponse>(body) {
        Ok(response) => response
            .data
            .into_iter()
            .filter_map(|item| item.permalink)
            .filter(|permalink| !permalink.is_empty())
            .map(PostRef::from)
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to parse Graph API response: {}", e);
            Vec::new()
        }
    }
}

/// Human-readable message of a Graph API error body, or the raw body
pub fn parse_graph_api_error(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: Some(error) }) => format!(
            "{} (type: {}, code: {})",
            error.message.as_deref().unwrap_or("Unknown error"),
            error.kind.as_deref().unwrap_or(""),
            error.code.unwrap_or(0)
        ),
        _ => body.to_string(),
    }
}

#[async_trait]
impl PostSource for GraphApiSource {
    fn name(&self) -> &'static str {
        "graph-api"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        let response = self
            .http
            .get(self.media_url())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() != 200 {
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: parse_graph_api_error(&body),
            });
        }

        Ok(parse_media_response(&body))
    }
}
