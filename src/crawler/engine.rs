//! Traversal engine - the crawl orchestration core
//!
//! A depth-first pre-order walk over same-domain pages, driven by an
//! explicit frame stack instead of native recursion so large depth budgets
//! cannot exhaust the call stack. The engine owns all mutable crawl state:
//! the visited set, the document store, and the one HTTP client reused for
//! every request.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::parser::{discover_links, extract_title};
use crate::extract::extract_page;
use crate::store::{CrawledDocument, DocumentStore, VisitedSet};
use crate::url::{extract_domain, is_eligible, strip_fragment};
use crate::{CrawlError, Result, UrlError};
use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

/// One pending visit: a candidate URL and the depth it was discovered at
struct Frame {
    url: String,
    depth: u32,
}

/// Documentation crawler engine
///
/// Created from a validated configuration, consumed by [`Engine::crawl`],
/// which returns the ordered document store.
pub struct Engine {
    config: CrawlerConfig,
    client: Client,
    base_url: Url,
    base_domain: String,
    visited: VisitedSet,
    store: DocumentStore,
}

impl Engine {
    /// Creates a new engine, validating the configuration first
    ///
    /// Any error here is fatal: nothing has been fetched yet and the run
    /// produces no output.
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)?;
        let base_domain = extract_domain(&base_url).ok_or(UrlError::MissingDomain)?;
        let client = build_http_client(&config)?;

        tracing::info!(
            "Initialized crawler for {} (max_depth={}, max_pages={})",
            config.base_url,
            config.max_depth,
            config.max_pages
        );

        Ok(Self {
            config,
            client,
            base_url,
            base_domain,
            visited: VisitedSet::new(),
            store: DocumentStore::new(),
        })
    }

    /// Runs the crawl to completion and returns the collected documents
    ///
    /// Documents appear in depth-first pre-order: a page's record precedes
    /// the records of every page discovered through it. Per-page failures
    /// are logged and skipped; they never abort the run.
    pub fn crawl(mut self) -> Result<DocumentStore> {
        tracing::info!("Starting crawl from {}", self.config.base_url);

        let mut stack = vec![Frame {
            url: self.config.base_url.clone(),
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            if frame.depth > self.config.max_depth || self.visited.len() >= self.config.max_pages {
                tracing::debug!(
                    "Dropping {}: depth={}, visited={}",
                    frame.url,
                    frame.depth,
                    self.visited.len()
                );
                continue;
            }

            if !is_eligible(&frame.url, &self.base_domain, &self.visited) {
                continue;
            }

            // Mark visited before any descent so sibling branches cannot
            // re-queue this page.
            let canonical = strip_fragment(&frame.url).to_string();
            self.visited.insert(canonical.clone());

            match self.process_page(&canonical, frame.depth) {
                Ok(links) => {
                    // Reverse push keeps document order on a LIFO stack.
                    for link in links.into_iter().rev() {
                        stack.push(Frame {
                            url: link,
                            depth: frame.depth + 1,
                        });
                    }

                    // Be polite - rate limiting
                    std::thread::sleep(self.config.rate_limit_delay);
                }
                Err(e) => {
                    tracing::error!("Error crawling {}: {}", canonical, e);
                }
            }
        }

        tracing::info!(
            "Crawl completed. Visited {} pages, extracted {} documents",
            self.visited.len(),
            self.store.len()
        );

        Ok(self.store)
    }

    /// Fetches, extracts, and records one page; returns its queued links
    fn process_page(&mut self, url: &str, depth: u32) -> Result<Vec<String>> {
        tracing::info!("Crawling [{}]: {}", depth, url);

        let body = match fetch_page(&self.client, url) {
            FetchResult::Success { body, .. } => body,
            FetchResult::HttpError { status_code } => {
                return Err(CrawlError::HttpStatus {
                    url: url.to_string(),
                    status: status_code,
                });
            }
            FetchResult::NetworkError { error } => {
                return Err(if error.is_timeout() {
                    CrawlError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    CrawlError::Http {
                        url: url.to_string(),
                        source: error,
                    }
                });
            }
        };

        let document = Html::parse_document(&body);

        let title = extract_title(&document).unwrap_or_else(|| url.to_string());
        tracing::debug!("Page title: {}", title);

        let extracted = extract_page(&document);
        tracing::debug!(
            "Extracted {} code blocks from {}",
            extracted.code_blocks.len(),
            url
        );

        self.store.push(CrawledDocument {
            url: url.to_string(),
            title,
            content: extracted.content,
            code_blocks: extracted.code_blocks,
            depth,
            crawled_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        let links = discover_links(&document, url, &self.base_url);
        tracing::debug!("Found {} candidate links on {}", links.len(), url);

        Ok(links)
    }
}
