use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// RSS-Bridge instance used for live posts
pub const DEFAULT_AGGREGATOR_URL: &str = "https://rss-bridge.org/bridge01/";

/// Instagram account shown on the site
pub const DEFAULT_INSTAGRAM_USERNAME: &str = "tc11assb";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Refresh the fallback file at startup
    pub instagram_enabled: bool,
    pub instagram_username: String,
    /// Location of the static fallback file (`instagram.json`)
    pub instagram_output_path: PathBuf,
    /// Graph API access token
    pub instagram_access_token: Option<String>,
    /// Instagram Business Account ID (required for Graph API)
    pub instagram_account_id: Option<String>,
    /// Base URL of the RSS-Bridge instance
    pub aggregator_url: String,
    /// Remote `/instagram.json`; when unset the local fallback file is read instead
    pub static_posts_url: Option<String>,
    pub embed_poll_interval: Duration,
    pub embed_poll_max_attempts: u32,
    pub mcp_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parse_var("PORT", 8080),
            instagram_enabled: parse_var("INSTAGRAM_ENABLED", true),
            instagram_username: env::var("INSTAGRAM_USERNAME")
                .unwrap_or_else(|_| DEFAULT_INSTAGRAM_USERNAME.to_string()),
            instagram_output_path: env::var("INSTAGRAM_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content/instagram.json")),
            instagram_access_token: non_blank_var("INSTAGRAM_ACCESS_TOKEN"),
            instagram_account_id: non_blank_var("INSTAGRAM_ACCOUNT_ID"),
            aggregator_url: env::var("INSTAGRAM_AGGREGATOR_URL")
                .unwrap_or_else(|_| DEFAULT_AGGREGATOR_URL.to_string()),
            static_posts_url: non_blank_var("STATIC_POSTS_URL"),
            embed_poll_interval: Duration::from_millis(parse_var("EMBED_POLL_INTERVAL_MS", 300)),
            embed_poll_max_attempts: parse_var("EMBED_POLL_MAX_ATTEMPTS", 100),
            mcp_enabled: parse_var("MCP_ENABLED", true),
        }
    }

    /// Access token and account id, when both are configured
    pub fn graph_api_credentials(&self) -> Option<(&str, &str)> {
        match (&self.instagram_access_token, &self.instagram_account_id) {
            (Some(token), Some(account)) => Some((token.as_str(), account.as_str())),
            _ => None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration for tests: no credentials, fallback file in `dir`
    pub fn for_tests(dir: &std::path::Path) -> Self {
        Self {
            port: 0,
            instagram_enabled: false,
            instagram_username: DEFAULT_INSTAGRAM_USERNAME.to_string(),
            instagram_output_path: dir.join("instagram.json"),
            instagram_access_token: None,
            instagram_account_id: None,
            aggregator_url: "http://127.0.0.1:9/".to_string(),
            static_posts_url: None,
            embed_poll_interval: Duration::from_millis(1),
            embed_poll_max_attempts: 5,
            mcp_enabled: true,
        }
    }
}
