//! RSS-Bridge JSON feed payload
//!
//! The feed is parsed once into `AggregatorPayload`. Anything that does not
//! look like the expected shape is treated as absent rather than an error.

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::lenient::{lenient_objects, lenient_string};
use crate::domain::entities::PostRef;

/// Substring every accepted post permalink contains
const POST_URL_MARKER: &str = "instagram.com/p/";

/// Validated RSS-Bridge feed
#[derive(Debug, Default, Deserialize)]
pub struct AggregatorPayload {
    #[serde(default, deserialize_with = "lenient_objects")]
    pub items: Vec<AggregatorItem>,
}

/// One feed entry; only the link fields matter
#[derive(Debug, Default, Deserialize)]
pub struct AggregatorItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
}

impl AggregatorItem {
    /// `url`, falling back to `id` when `url` is absent or empty
    fn link(&self) -> Option<&str> {
        [self.url.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

impl AggregatorPayload {
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Post permalinks in feed order, at most `limit` of them
    pub fn post_urls(&self, limit: usize) -> Vec<PostRef> {
        self.items
            .iter()
            .filter_map(AggregatorItem::link)
            .filter(|link| link.contains(POST_URL_MARKER))
            .take(limit)
            .map(PostRef::from)
            .collect()
    }
}

/// Extract post permalinks from a raw feed payload. Never fails.
pub fn extract_from_aggregator_payload(payload: &Value, limit: usize) -> Vec<PostRef> {
    AggregatorPayload::from_value(payload).post_urls(limit)
}
