//! JSON-LD date extraction
//!
//! Recovers publication and modification timestamps from the structured
//! data blocks (`<script type="application/ld+json">`) embedded in a page.
//! Only `@graph` entries typed exactly "Article" or "WebPage" contribute;
//! later matching entries overwrite earlier ones.

use scraper::{Html, Selector};
use serde_json::Value;

/// Dates recovered from a page's structured data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDates {
    /// Value of `datePublished`, if present
    pub published: Option<String>,

    /// Value of `dateModified`, if present
    pub modified: Option<String>,
}

impl PageDates {
    /// The date used for the sitemap `<lastmod>`: modification date when
    /// available, publication date otherwise
    pub fn lastmod(self) -> Option<String> {
        self.modified.or(self.published)
    }
}

/// Extracts publication/modification dates from a page's JSON-LD blocks
///
/// Each `ld+json` script is parsed independently; invalid JSON or a missing
/// top-level `@graph` array skips that block and the scan continues with
/// the rest of the page.
pub fn extract_dates(html: &str) -> PageDates {
    let document = Html::parse_document(html);
    let mut dates = PageDates::default();

    let Ok(script_selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return dates;
    };

    for element in document.select(&script_selector) {
        let text: String = element.text().collect();

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Skipping unparseable ld+json block: {}", e);
                continue;
            }
        };

        let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
            continue;
        };

        for entry in graph {
            match entry.get("@type").and_then(Value::as_str) {
                Some("Article") | Some("WebPage") => {
                    if let Some(modified) = entry.get("dateModified").and_then(Value::as_str) {
                        dates.modified = Some(modified.to_string());
                    }
                    if let Some(published) = entry.get("datePublished").and_then(Value::as_str) {
                        dates.published = Some(published.to_string());
                    }
                }
                _ => {}
            }
        }
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_script(json: &str) -> String {
        format!(
            r#"<html><head><script type="application/ld+json">{}</script></head><body></body></html>"#,
            json
        )
    }

    #[test]
    fn test_extracts_both_dates_from_article() {
        let html = page_with_script(
            r#"{"@graph":[{"@type":"Article","datePublished":"2024-01-01","dateModified":"2024-02-01"}]}"#,
        );
        let dates = extract_dates(&html);
        assert_eq!(dates.published.as_deref(), Some("2024-01-01"));
        assert_eq!(dates.modified.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_lastmod_prefers_modified_over_published() {
        let dates = PageDates {
            published: Some("2024-01-01".to_string()),
            modified: Some("2024-02-01".to_string()),
        };
        assert_eq!(dates.lastmod().as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_lastmod_falls_back_to_published() {
        let dates = PageDates {
            published: Some("2024-01-01".to_string()),
            modified: None,
        };
        assert_eq!(dates.lastmod().as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_webpage_type_contributes() {
        let html = page_with_script(
            r#"{"@graph":[{"@type":"WebPage","dateModified":"2023-12-24"}]}"#,
        );
        assert_eq!(extract_dates(&html).modified.as_deref(), Some("2023-12-24"));
    }

    #[test]
    fn test_unrecognized_types_ignored() {
        let html = page_with_script(
            r#"{"@graph":[{"@type":"Organization","dateModified":"2020-01-01"},{"@type":"BreadcrumbList","datePublished":"2020-01-01"}]}"#,
        );
        assert_eq!(extract_dates(&html), PageDates::default());
    }

    #[test]
    fn test_last_matching_entry_wins() {
        let html = page_with_script(
            r#"{"@graph":[
                {"@type":"Article","dateModified":"2024-01-01"},
                {"@type":"WebPage","dateModified":"2024-03-01"}
            ]}"#,
        );
        assert_eq!(extract_dates(&html).modified.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_later_entry_does_not_erase_earlier_fields() {
        // The second entry has no datePublished; the first one's survives
        let html = page_with_script(
            r#"{"@graph":[
                {"@type":"Article","datePublished":"2024-01-01"},
                {"@type":"Article","dateModified":"2024-02-01"}
            ]}"#,
        );
        let dates = extract_dates(&html);
        assert_eq!(dates.published.as_deref(), Some("2024-01-01"));
        assert_eq!(dates.modified.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_invalid_json_skipped() {
        let html = page_with_script("{not valid json");
        assert_eq!(extract_dates(&html), PageDates::default());
    }

    #[test]
    fn test_missing_graph_skipped() {
        let html = page_with_script(r#"{"@type":"Article","dateModified":"2024-02-01"}"#);
        assert_eq!(extract_dates(&html), PageDates::default());
    }

    #[test]
    fn test_broken_block_does_not_stop_scan() {
        let html = r#"<html><head>
            <script type="application/ld+json">{broken</script>
            <script type="application/ld+json">{"@graph":[{"@type":"Article","dateModified":"2024-02-01"}]}</script>
            </head><body></body></html>"#;
        assert_eq!(extract_dates(html).modified.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_non_ld_scripts_ignored() {
        let html = r#"<html><head>
            <script>var x = {"@graph":[{"@type":"Article","dateModified":"1999-01-01"}]};</script>
        </head><body></body></html>"#;
        assert_eq!(extract_dates(html), PageDates::default());
    }
}
