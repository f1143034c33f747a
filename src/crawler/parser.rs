//! Link extraction from HTML pages
//!
//! Collects anchor hrefs from the document body and resolves them against
//! the site root. Resolution and the same-site check are deliberately
//! string-based: a candidate survives only when its resolved form starts
//! with the crawl's base URL.

use scraper::{Html, Selector};
use std::collections::HashSet;

/// Extracts same-site absolute URLs from an HTML document
///
/// # Link Rules
///
/// * Anchors anywhere inside `<body>` contribute their `href`.
/// * `mailto:` and `javascript:` links are discarded.
/// * Root-relative hrefs (`/page`, but not `//host`) resolve against the
///   site root; hrefs already starting with `http` are used as-is; anything
///   else joins the site root with duplicate slashes trimmed.
/// * Only resolved URLs that start with `base_url` are kept.
/// * Results are deduplicated by exact string equality, first-seen order.
///
/// Malformed markup is parsed best-effort; unparseable elements are simply
/// absent from the result.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The crawl's base URL, with trailing slash
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let Ok(anchor_selector) = Selector::parse("body a[href]") else {
        return links;
    };

    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(resolved) = resolve_href(href, base_url) else {
            continue;
        };

        if resolved.starts_with(base_url) && seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}

/// Resolves an href to an absolute URL string, or None for ignored schemes
fn resolve_href(href: &str, base_url: &str) -> Option<String> {
    if href.starts_with("mailto:") || href.starts_with("javascript:") {
        return None;
    }

    let root = base_url.trim_end_matches('/');

    if href.starts_with('/') && !href.starts_with("//") {
        Some(format!("{}{}", root, href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        Some(format!("{}/{}", root, href.trim_start_matches('/')))
    }
}
