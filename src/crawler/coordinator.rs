//! Crawler coordinator - main crawl traversal logic
//!
//! Depth-first recursive traversal from the site root. Each page is fetched
//! exactly once: a URL is claimed in the visited set before its only fetch,
//! which bounds the traversal on cyclic link graphs, and the fetched body is
//! handed straight into the recursion. Records are emitted in pre-order, so
//! a page's own record precedes those of its descendants.

use crate::config::Config;
use crate::crawler::dates::extract_dates;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::gate::should_crawl;
use crate::crawler::parser::extract_links;
use crate::robots::{fetch_rules, RuleSet};
use crate::state::{CrawlState, UrlRecord};
use crate::Result;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// Single-domain crawl engine
///
/// Owns the HTTP client and the immutable robots.txt rules; the mutable
/// traversal state is created per run and threaded through the recursion.
pub struct Crawler {
    client: Client,
    rules: RuleSet,
    base_url: String,
}

impl Crawler {
    /// Creates a crawler for a site
    ///
    /// # Arguments
    ///
    /// * `base_url` - The site's base URL, with trailing slash
    /// * `rules` - Parsed robots.txt rules for the site
    /// * `client` - The HTTP client to fetch pages with
    pub fn new(base_url: String, rules: RuleSet, client: Client) -> Self {
        Self {
            client,
            rules,
            base_url,
        }
    }

    /// Runs a full crawl from the base URL
    ///
    /// The root fetch exists purely for link discovery; the base URL itself
    /// never becomes a record unless some page links back to it. Returns the
    /// accumulated records deduplicated by (url, lastmod), pre-order.
    pub async fn run(&self) -> Vec<UrlRecord> {
        let mut state = CrawlState::new();

        tracing::info!("Crawling: {}", self.base_url);
        if let Some(html) = fetch_page(&self.client, &self.base_url).await {
            self.crawl_links(html, &mut state).await;
        }

        tracing::info!("Crawl finished: {} URLs visited", state.visited_count());
        state.into_records()
    }

    /// Recursively crawls every page linked from already-fetched content
    ///
    /// Takes the page body rather than a URL so each page is fetched exactly
    /// once: the body obtained to gate and date a candidate link is the same
    /// one its own links are then discovered from. Boxed future because
    /// async recursion needs an indirection; the visited set and record
    /// accumulator travel by mutable reference.
    fn crawl_links<'a>(
        &'a self,
        html: String,
        state: &'a mut CrawlState,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            for link in extract_links(&html, &self.base_url) {
                if state.is_visited(&link) {
                    tracing::debug!("Already visited: {}", link);
                    continue;
                }

                // The crawler queries the catch-all group, as sites rarely
                // name small crawlers explicitly
                if !self.rules.is_allowed(&link, &self.base_url, "*") {
                    tracing::debug!("Skipping {} (disallowed by robots.txt)", link);
                    continue;
                }

                // Claim the URL before fetching; two pages linking to each
                // other must not recurse into one another forever
                state.mark_visited(link.clone());

                tracing::info!("Crawling: {}", link);
                let Some(page_html) = fetch_page(&self.client, &link).await else {
                    continue;
                };

                if !should_crawl(&page_html) {
                    tracing::debug!("Skipping {} (noindex/nofollow)", link);
                    continue;
                }

                let lastmod = extract_dates(&page_html).lastmod();
                state.push_record(UrlRecord {
                    url: link,
                    lastmod,
                });

                self.crawl_links(page_html, &mut *state).await;
            }
        })
    }
}

/// Crawls a configured site and returns its sitemap records
///
/// Fetches robots.txt exactly once before any crawling; if it cannot be
/// retrieved the run aborts here, fail-closed, and nothing is crawled.
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(Vec<UrlRecord>)` - Records for every surviving page, pre-order
/// * `Err(SitemapError)` - robots.txt unavailable or malformed, or the HTTP
///   client could not be built
///
/// # Example
///
/// ```no_run
/// use sitemapper::config::load_config;
/// use sitemapper::crawler::crawl_site;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let records = crawl_site(&config).await?;
/// println!("{} pages", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site(config: &Config) -> Result<Vec<UrlRecord>> {
    let client = build_http_client(&config.user_agent, &config.fetch)?;

    let rules = fetch_rules(&client, &config.site.base_url).await?;

    let crawler = Crawler::new(config.site.base_url.clone(), rules, client);
    Ok(crawler.run().await)
}
