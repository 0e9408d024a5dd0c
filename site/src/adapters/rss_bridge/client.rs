//! RSS-Bridge HTTP client

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use urlencoding::encode;

use super::payload::extract_from_aggregator_payload;
use crate::adapters::http::ensure_success;
use crate::domain::entities::{PostRef, MAX_POSTS};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Live post source backed by RSS-Bridge
pub struct RssBridgeSource {
    http: Client,
    feed_url: String,
}

impl RssBridgeSource {
    pub fn new(http: Client, base_url: &str, username: &str) -> Self {
        Self {
            http,
            feed_url: feed_url(base_url, username),
        }
    }
}

/// JSON feed URL of `username`'s profile
pub fn feed_url(base_url: &str, username: &str) -> String {
    format!(
        "{}/?action=display&bridge=InstagramBridge&context=Username&u={}&media_type=all&direct_links=on&format=Json",
        base_url.trim_end_matches('/'),
        encode(username)
    )
}

#[async_trait]
impl PostSource for RssBridgeSource {
    fn name(&self) -> &'static str {
        "rss-bridge"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        let response = self
            .http
            .get(&self.feed_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let payload: Value = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        let posts = extract_from_aggregator_payload(&payload, MAX_POSTS);
        tracing::debug!("RSS-Bridge returned {} posts", posts.len());
        Ok(posts)
    }
}
