//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - Blocking HTTP fetching with a single shared client
//! - HTML parsing for titles and link discovery
//! - The depth-first traversal engine with depth and page budgets

mod engine;
mod fetcher;
mod parser;

pub use engine::Engine;
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::{discover_links, extract_title};

use crate::config::CrawlerConfig;
use crate::store::DocumentStore;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It validates the
/// configuration, builds the HTTP client, walks the site depth-first within
/// the configured budgets, and returns the ordered document store.
pub fn crawl(config: CrawlerConfig) -> Result<DocumentStore> {
    Engine::new(config)?.crawl()
}
