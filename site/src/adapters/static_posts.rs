//! Static fallback post sources
//!
//! The fallback list is either fetched from a deployed site's `/instagram.json`
//! or read straight from the local fallback file.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::file_store::FilePostStore;
use crate::adapters::http::ensure_success;
use crate::domain::entities::PostRef;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// `/instagram.json` served over HTTP
pub struct HttpStaticSource {
    http: Client,
    url: String,
}

impl HttpStaticSource {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

/// Parse the canonical fallback shape: a flat array of permalinks
pub fn parse_static_posts(body: &str) -> Result<Vec<PostRef>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))
}

#[async_trait]
impl PostSource for HttpStaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        let response = self.http.get(&self.url).send().await?;
        let body = ensure_success(response).await?.text().await?;
        parse_static_posts(&body)
    }
}

/// Where the widget reads its fallback list from
pub enum StaticPosts {
    Remote(HttpStaticSource),
    Local(Arc<FilePostStore>),
}

#[async_trait]
impl PostSource for StaticPosts {
    fn name(&self) -> &'static str {
        match self {
            StaticPosts::Remote(source) => source.name(),
            StaticPosts::Local(store) => store.name(),
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        match self {
            StaticPosts::Remote(source) => source.fetch_posts().await,
            StaticPosts::Local(store) => store.fetch_posts().await,
        }
    }
}
