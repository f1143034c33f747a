//! Sitemapper: a single-domain sitemap generator
//!
//! This crate crawls a web domain starting from its root, filters discovered
//! pages through robots.txt rules and per-page robots meta directives, pulls
//! publication/modification dates out of embedded JSON-LD, and writes the
//! surviving URLs to a sitemap XML file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod state;

use thiserror::Error;

/// Main error type for sitemapper operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch robots.txt from {url}; refusing to crawl without rules")]
    RobotsUnavailable { url: String },

    #[error("Malformed robots.txt line {line_number}: {line:?} (expected `directive: value`)")]
    MalformedRobotsLine { line_number: usize, line: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for sitemapper operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_site, Crawler};
pub use output::{render_sitemap, write_sitemap};
pub use robots::RuleSet;
pub use state::{CrawlState, UrlRecord};
