//! Sitemap XML serialization
//!
//! Renders URL records into the sitemaps.org 0.9 `urlset` format and writes
//! the result to disk, fully replacing any previous file.

use crate::state::UrlRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::path::Path;

/// Renders records as a pretty-printed sitemap XML document
///
/// Every record contributes one `<url>` element with an entity-escaped
/// `<loc>`. `<lastmod>` is emitted only when the record carries a date that
/// parses; it is formatted as an ISO-8601 (RFC 3339) date-time.
pub fn render_sitemap(records: &[UrlRecord]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for record in records {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&record.url)));

        if let Some(raw) = record.lastmod.as_deref() {
            match format_lastmod(raw) {
                Some(formatted) => {
                    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(&formatted)));
                }
                None => {
                    tracing::warn!(
                        "Unparseable lastmod date {:?} for {}; omitting element",
                        raw,
                        record.url
                    );
                }
            }
        }

        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Writes the sitemap for the given records to a file
///
/// The file is overwritten in full; no prior content survives.
pub fn write_sitemap(records: &[UrlRecord], path: &Path) -> std::io::Result<()> {
    let xml = render_sitemap(records);
    std::fs::write(path, xml)?;
    tracing::info!("Wrote sitemap with {} URLs to {}", records.len(), path.display());
    Ok(())
}

/// Normalizes an extracted date string to RFC 3339
///
/// Accepts full RFC 3339 timestamps (offset preserved), naive date-times,
/// and bare dates (midnight UTC). Returns None when nothing parses.
fn format_lastmod(raw: &str) -> Option<String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.to_rfc3339());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive).to_rfc3339());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).to_rfc3339());
    }

    None
}

/// Escapes the five XML-significant characters
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, lastmod: Option<&str>) -> UrlRecord {
        UrlRecord {
            url: url.to_string(),
            lastmod: lastmod.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_sitemap_structure() {
        let xml = render_sitemap(&[]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_record_without_lastmod_has_no_lastmod_element() {
        let xml = render_sitemap(&[record("https://example.com/page", None)]);
        assert!(xml.contains("<loc>https://example.com/page</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_bare_date_becomes_midnight_utc() {
        let xml = render_sitemap(&[record("https://example.com/post", Some("2024-02-01"))]);
        assert!(xml.contains("<lastmod>2024-02-01T00:00:00+00:00</lastmod>"));
    }

    #[test]
    fn test_rfc3339_date_preserves_offset() {
        let xml = render_sitemap(&[record(
            "https://example.com/post",
            Some("2024-02-01T09:30:00+02:00"),
        )]);
        assert!(xml.contains("<lastmod>2024-02-01T09:30:00+02:00</lastmod>"));
    }

    #[test]
    fn test_naive_datetime_assumed_utc() {
        let xml = render_sitemap(&[record(
            "https://example.com/post",
            Some("2024-02-01T09:30:00"),
        )]);
        assert!(xml.contains("<lastmod>2024-02-01T09:30:00+00:00</lastmod>"));
    }

    #[test]
    fn test_unparseable_date_omits_lastmod() {
        let xml = render_sitemap(&[record("https://example.com/post", Some("next tuesday"))]);
        assert!(xml.contains("<loc>https://example.com/post</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_loc_is_entity_escaped() {
        let xml = render_sitemap(&[record("https://example.com/search?q=a&b=<c>", None)]);
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=&lt;c&gt;</loc>"));
    }

    #[test]
    fn test_records_render_in_given_order() {
        let xml = render_sitemap(&[
            record("https://example.com/first", None),
            record("https://example.com/second", None),
        ]);
        let first = xml.find("/first").unwrap();
        let second = xml.find("/second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_write_sitemap_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");

        std::fs::write(&path, "stale content that must disappear").unwrap();
        write_sitemap(&[record("https://example.com/a", None)], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<loc>https://example.com/a</loc>"));
        assert!(!written.contains("stale content"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml(r#"he said "hi'"#), "he said &quot;hi&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
