//! HTTP fetcher implementation
//!
//! Builds the crawl's HTTP client and fetches individual pages. The fetcher
//! is deliberately permissive: only a 404 (and transport-level failures)
//! count as "no content"; any other status yields whatever body came back.

use crate::config::{FetchConfig, UserAgentConfig};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds the HTTP client used for the whole crawl
///
/// The client identifies itself with a descriptive user agent string in the
/// form `CrawlerName/Version (+ContactURL; ContactEmail)` and enforces the
/// configured request and connect timeouts. A fetch that hangs past the
/// timeout is treated as a fetch failure rather than blocking the crawl.
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `fetch` - Timeout tuning
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, returning its body or None when there is no content
///
/// * HTTP 404 yields `None`; the page simply does not exist.
/// * Transport errors (connection refused, timeout, TLS) yield `None` and a
///   warning; one broken branch never interrupts the rest of the crawl.
/// * Every other status, success or not, yields the response body.
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            return None;
        }
    };

    if response.status() == StatusCode::NOT_FOUND {
        tracing::debug!("Not found: {}", url);
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("Failed to read body of {}: {}", url, e);
            None
        }
    }
}
