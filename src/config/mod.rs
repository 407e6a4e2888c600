//! Configuration module for docsweep
//!
//! Crawl parameters are built by the caller (typically the CLI) and validated
//! before any network activity happens.
//!
//! # Example
//!
//! ```
//! use docsweep::config::CrawlerConfig;
//!
//! let config = CrawlerConfig::new("https://docs.example.com/");
//! assert!(config.validate().is_ok());
//! assert_eq!(config.max_depth, 3);
//! ```

mod validation;

use std::time::Duration;

/// Default user agent presented to crawled sites
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Crawler behavior configuration
///
/// Immutable settings for one crawl run. Invalid values are rejected by
/// [`CrawlerConfig::validate`] before the engine touches the network.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Seed URL; also defines the domain scope of the crawl
    pub base_url: String,

    /// Maximum link hops from the seed
    pub max_depth: u32,

    /// Maximum total pages fetched in one run
    pub max_pages: usize,

    /// Per-request timeout
    pub timeout: Duration,

    /// Pause inserted after each processed page
    pub rate_limit_delay: Duration,

    /// User agent string sent with every request
    pub user_agent: String,
}

impl CrawlerConfig {
    /// Creates a configuration with the library defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_depth: 3,
            max_pages: 200,
            timeout: Duration::from_secs(10),
            rate_limit_delay: Duration::from_millis(500),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Validates the configuration, failing fast on invalid values
    pub fn validate(&self) -> crate::ConfigResult<()> {
        validation::validate(self)
    }
}
