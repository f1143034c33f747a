//! Per-page indexability gate
//!
//! Decides from a page's robots meta tags whether the page may be indexed
//! and its links followed. "noindex" and "nofollow" are deliberately
//! conflated into one decision: either token keeps the page out of the
//! sitemap AND stops link discovery through it.

use scraper::{Html, Selector};

/// Checks whether a fetched page may be indexed and followed
///
/// Scans every `<meta name="robots">` tag (name match case-insensitive). If
/// the lower-cased content of any such tag contains the substring "noindex"
/// or "nofollow", the page is gated out. Absence of robots meta tags allows
/// crawling. Malformed markup is parsed best-effort and never fails.
pub fn should_crawl(html: &str) -> bool {
    let document = Html::parse_document(html);

    let Ok(meta_selector) = Selector::parse("meta") else {
        return true;
    };

    for element in document.select(&meta_selector) {
        let Some(name) = element.value().attr("name") else {
            continue;
        };

        if !name.eq_ignore_ascii_case("robots") {
            continue;
        }

        let content = element.value().attr("content").unwrap_or("").to_lowercase();
        tracing::debug!("robots meta content: [{}]", content);

        if content.contains("noindex") || content.contains("nofollow") {
            return false;
        }
    }

    true
}
