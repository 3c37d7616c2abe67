//! HTTP fetcher implementation
//!
//! Builds the HTTP client used for every request in a run and fetches page
//! bodies. Transport failures never propagate: a page that cannot be
//! retrieved is reported as absent and the caller treats it as empty input.

use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for the whole run
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Any transport-level failure (connect error, timeout, body decode error)
/// yields `None`. Non-success HTTP statuses still yield the body: the email
/// scan is purely lexical and error pages are scanned like any other page.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("HTTP {} for {}", status.as_u16(), url);
            }

            match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::debug!("Failed to read body from {}: {}", url, e);
                    None
                }
            }
        }
        Err(e) => {
            if e.is_timeout() {
                tracing::debug!("Request timeout for {}", url);
            } else if e.is_connect() {
                tracing::debug!("Connection failed for {}", url);
            } else {
                tracing::debug!("Fetch failed for {}: {}", url, e);
            }
            None
        }
    }
}
