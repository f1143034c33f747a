//! Robots.txt handling module
//!
//! Fetches and parses the site's robots.txt into a [`RuleSet`]. The fetch
//! happens exactly once, before any crawling; if robots.txt cannot be
//! retrieved the whole run aborts rather than crawl without known rules.

mod parser;

pub use parser::RuleSet;

use crate::crawler::fetch_page;
use crate::{Result, SitemapError};
use reqwest::Client;

/// Fetches and parses robots.txt for the site
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - The crawl's base URL, with trailing slash
///
/// # Returns
///
/// * `Ok(RuleSet)` - Successfully fetched and parsed robots.txt
/// * `Err(SitemapError::RobotsUnavailable)` - robots.txt could not be retrieved
/// * `Err(SitemapError::MalformedRobotsLine)` - robots.txt failed to parse
pub async fn fetch_rules(client: &Client, base_url: &str) -> Result<RuleSet> {
    let robots_url = format!("{}robots.txt", base_url);

    let Some(content) = fetch_page(client, &robots_url).await else {
        return Err(SitemapError::RobotsUnavailable { url: robots_url });
    };

    let rules = RuleSet::parse(&content)?;
    tracing::info!(
        "Parsed robots.txt from {} ({} disallow rules)",
        robots_url,
        rules.rule_count()
    );

    Ok(rules)
}
