//! Instagram profile page adapter
//!
//! Scrapes post shortcodes from the public profile page. Used when no Graph
//! API credentials are configured.

use std::collections::HashSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::adapters::http::{ensure_success, BROWSER_USER_AGENT};
use crate::domain::entities::{PostRef, MAX_POSTS};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

static POST_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/p/([A-Za-z0-9_-]+)").expect("valid post link regex"));
static REEL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/reel/([A-Za-z0-9_-]+)").expect("valid reel link regex"));

/// Instagram shortcodes are 10 to 12 characters long
const SHORTCODE_LEN: std::ops::RangeInclusive<usize> = 10..=12;

pub struct ProfilePageSource {
    http: Client,
    username: String,
}

impl ProfilePageSource {
    pub fn new(http: Client, username: impl Into<String>) -> Self {
        Self {
            http,
            username: username.into(),
        }
    }

    pub fn profile_url(&self) -> String {
        format!("https://www.instagram.com/{}/", self.username)
    }
}

/// Post permalinks found in a profile page, posts before reels.
///
/// Reels are linked through `/p/`, which embeds both kinds.
pub fn extract_post_urls_from_html(html: &str, limit: usize) -> Vec<PostRef> {
    let mut seen = HashSet::new();

    POST_LINK
        .captures_iter(html)
        .chain(REEL_LINK.captures_iter(html))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|code| SHORTCODE_LEN.contains(&code.len()))
        .filter(|code| seen.insert(*code))
        .take(limit)
        .map(|code| PostRef::new(format!("https://www.instagram.com/p/{}", code)))
        .collect()
}

#[async_trait]
impl PostSource for ProfilePageSource {
    fn name(&self) -> &'static str {
        "profile-page"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        let url = self.profile_url();
        tracing::debug!("Fetching profile page {}", url);

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;
        let html = ensure_success(response).await?.text().await?;

        let posts = extract_post_urls_from_html(&html, MAX_POSTS);
        tracing::debug!("Extracted {} posts from profile page", posts.len());
        Ok(posts)
    }
}
