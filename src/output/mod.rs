//! Output module
//!
//! Serializes crawl results into the sitemap XML document.

mod sitemap;

pub use sitemap::{render_sitemap, write_sitemap};
