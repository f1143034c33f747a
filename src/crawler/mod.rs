//! Crawler module
//!
//! Everything between robots.txt and the sitemap: fetching pages, gating
//! them on robots meta directives, extracting links and dates, and the
//! recursive traversal that ties it together.

mod coordinator;
mod dates;
mod fetcher;
mod gate;
mod parser;

pub use coordinator::{crawl_site, Crawler};
pub use dates::{extract_dates, PageDates};
pub use fetcher::{build_http_client, fetch_page};
pub use gate::should_crawl;
pub use parser::extract_links;
