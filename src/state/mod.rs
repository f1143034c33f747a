//! Crawl state: visited-set and accumulated URL records
//!
//! One [`CrawlState`] exists per run, owned by the crawler and threaded by
//! mutable reference through each recursive step. There is exactly one
//! writer, so no synchronization is needed.

use std::collections::HashSet;

/// A sitemap entry for one crawled page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlRecord {
    /// Absolute URL of the page
    pub url: String,

    /// Raw last-modified date string extracted from the page, if any
    pub lastmod: Option<String>,
}

/// Process-scoped traversal state for a single crawl run
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<String>,
    records: Vec<UrlRecord>,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL has already been claimed by the traversal
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL as visited; must happen before its content is fetched for
    /// recursion, otherwise two mutually-linking pages recurse forever
    pub fn mark_visited(&mut self, url: String) {
        self.visited.insert(url);
    }

    /// Number of URLs claimed so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Appends a record in traversal (pre-)order
    pub fn push_record(&mut self, record: UrlRecord) {
        self.records.push(record);
    }

    /// Consumes the state, returning records deduplicated by full
    /// (url, lastmod) equality with first-seen order preserved
    pub fn into_records(self) -> Vec<UrlRecord> {
        let mut seen = HashSet::new();
        self.records
            .into_iter()
            .filter(|record| seen.insert(record.clone()))
            .collect()
    }
}
