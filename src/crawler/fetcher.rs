//! HTTP fetcher implementation
//!
//! This module builds the single blocking HTTP client the engine owns for
//! its whole run (one client, pooled connections, configured timeout and
//! user agent) and performs the one-attempt page fetches. There is no retry
//! policy: a failed URL stays failed for the rest of the run.

use crate::config::CrawlerConfig;
use reqwest::blocking::Client;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// The underlying transport error
        error: reqwest::Error,
    },
}

/// Builds the HTTP client used for every request of a crawl run
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
}

/// Fetches a URL with a single attempt
///
/// Blocks until the response arrives or the configured timeout fires.
/// Redirects are followed by the client; the returned body belongs to the
/// final URL of the chain.
pub fn fetch_page(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send() {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text() {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(error) => FetchResult::NetworkError { error },
            }
        }
        Err(error) => FetchResult::NetworkError { error },
    }
}
