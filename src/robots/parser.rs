//! Robots.txt rule model
//!
//! A deliberately small model of robots.txt: per user agent, an ordered list
//! of disallowed path prefixes. Matching follows a "specific overrides
//! general" policy: once an agent has any entries of its own, the `*` rules
//! are never consulted for it. The two rule lists are never merged.

use crate::SitemapError;
use std::collections::HashMap;

/// Parsed robots.txt directives, immutable once built
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Disallowed path prefixes keyed by lower-cased user agent token
    rules: HashMap<String, Vec<String>>,
}

impl RuleSet {
    /// Parses robots.txt content into a RuleSet
    ///
    /// Blank lines and `#` comments are ignored. `User-agent` sets the
    /// current group for subsequent `Disallow` lines (directive names are
    /// case-insensitive); before any `User-agent` line the group is `*`.
    /// `Allow`, `Sitemap`, `Crawl-delay` and other directives are ignored.
    ///
    /// # Errors
    ///
    /// A non-blank, non-comment line with no colon separator is a fatal
    /// parse error; crawling with half-understood rules is never attempted.
    pub fn parse(content: &str) -> Result<Self, SitemapError> {
        let mut rules: HashMap<String, Vec<String>> = HashMap::new();
        let mut current_agent = "*".to_string();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((directive, value)) = line.split_once(':') else {
                return Err(SitemapError::MalformedRobotsLine {
                    line_number: index + 1,
                    line: line.to_string(),
                });
            };

            let directive = directive.trim();
            let value = value.trim();

            if directive.eq_ignore_ascii_case("user-agent") {
                current_agent = value.to_lowercase();
            } else if directive.eq_ignore_ascii_case("disallow") {
                // An empty value is stored as-is; as a prefix it matches
                // every path.
                tracing::debug!("robots.txt rule ({}): Disallow: {}", current_agent, value);
                rules
                    .entry(current_agent.clone())
                    .or_default()
                    .push(value.to_string());
            }
        }

        Ok(Self { rules })
    }

    /// Checks whether a URL is allowed for the given user agent
    ///
    /// The candidate path is the URL relative to the site base (the base-URL
    /// prefix replaced with `/`). The agent's own rule list is checked
    /// first; the `*` list is consulted only when the agent has no entries
    /// at all, not when its entries simply failed to match.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute candidate URL
    /// * `base_url` - The crawl's base URL, with trailing slash
    /// * `user_agent` - User agent token; `*` matches the catch-all group
    pub fn is_allowed(&self, url: &str, base_url: &str, user_agent: &str) -> bool {
        let relative = relative_path(url, base_url);
        let agent = user_agent.to_lowercase();

        if let Some(disallows) = self.rules.get(&agent) {
            return !disallows.iter().any(|prefix| relative.starts_with(prefix));
        }

        if let Some(disallows) = self.rules.get("*") {
            return !disallows.iter().any(|prefix| relative.starts_with(prefix));
        }

        true
    }

    /// Returns true if no Disallow directives were recorded
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of Disallow directives across all agents
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

/// Computes the path of `url` relative to `base_url` by prefix replacement
fn relative_path(url: &str, base_url: &str) -> String {
    match url.strip_prefix(base_url) {
        Some(rest) => format!("/{}", rest),
        None => url.to_string(),
    }
}
