//! Docsweep main entry point
//!
//! This is the command-line interface for the docsweep documentation
//! crawler.

use anyhow::Context;
use clap::Parser;
use docsweep::config::{CrawlerConfig, DEFAULT_USER_AGENT};
use docsweep::crawler::crawl;
use docsweep::output::write_result;
use docsweep::{ConfigError, CrawlError};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Docsweep: crawl technical documentation websites
///
/// Starting from a seed URL, docsweep follows same-domain links up to a
/// bounded depth and page count, extracts heading-structured text and code
/// samples from every page, and writes the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "docsweep")]
#[command(version = "1.0.0")]
#[command(about = "Crawl technical documentation websites", long_about = None)]
struct Cli {
    /// Base URL to start crawling
    #[arg(long)]
    url: String,

    /// Output JSON file path
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Maximum crawl depth
    #[arg(long, default_value_t = 3)]
    max_depth: u32,

    /// Maximum pages to crawl
    #[arg(long, default_value_t = 100)]
    max_pages: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Delay between requests in seconds
    #[arg(long, default_value_t = 0.5)]
    rate_limit: f64,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<CrawlError>() {
            Some(CrawlError::Config(_)) => tracing::error!("{}", e),
            _ => tracing::error!("Fatal error: {:#}", e),
        }
        std::process::exit(1);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("docsweep=info,warn"),
        1 => EnvFilter::new("docsweep=debug,info"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the configuration, runs the crawl, and writes the result
fn run(cli: Cli) -> anyhow::Result<()> {
    // Duration::from_secs_f64 panics on negative or non-finite input, so
    // the flag is checked while it is still a float.
    if !cli.rate_limit.is_finite() || cli.rate_limit < 0.0 {
        return Err(CrawlError::Config(ConfigError::Validation(format!(
            "rate-limit must be a non-negative number of seconds, got {}",
            cli.rate_limit
        )))
        .into());
    }

    let config = CrawlerConfig {
        base_url: cli.url,
        max_depth: cli.max_depth,
        max_pages: cli.max_pages,
        timeout: Duration::from_secs(cli.timeout),
        rate_limit_delay: Duration::from_secs_f64(cli.rate_limit),
        user_agent: DEFAULT_USER_AGENT.to_string(),
    };

    let store = crawl(config)?;
    tracing::info!("Success! Crawled {} documents", store.len());

    let json = write_result(&store, &cli.output)
        .with_context(|| format!("Failed to write output to {}", cli.output.display()))?;
    println!("{}", json);

    Ok(())
}
