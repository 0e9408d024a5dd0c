//! Shared HTTP client setup for outbound fetches

use std::time::Duration;

use reqwest::Client;

use crate::error::SourceError;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Desktop browser user agent, sent where Instagram serves bots a login wall
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the client shared by every post source
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("tc11-site/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Turn a non-success response into `SourceError::Status`
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(SourceError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
