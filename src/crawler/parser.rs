//! HTML parsing for titles and outgoing links
//!
//! Link discovery follows the crawler's historical acceptance rule: an href
//! is queued when it starts with the literal first-20-character prefix of
//! the current page's URL, or with a single `/`. Root-relative hrefs are
//! resolved against the seed base URL; every other accepted href is
//! followed verbatim. Same-domain links that happen not to share the
//! 20-character prefix are skipped.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("hardcoded selector 'title' is valid"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("hardcoded selector 'a[href]' is valid"));

/// Extracts the page title from the HTML document
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Discovers the outgoing links to queue from a page, in document order
///
/// * `page_url` - the URL the page was fetched from (supplies the prefix)
/// * `base_url` - the seed URL, used to resolve root-relative hrefs
pub fn discover_links(document: &Html, page_url: &str, base_url: &Url) -> Vec<String> {
    let prefix = char_prefix(page_url, 20);
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let href = match element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        if !href.starts_with(prefix) && !href.starts_with('/') {
            continue;
        }

        if href.starts_with('/') {
            match base_url.join(href) {
                Ok(resolved) => links.push(resolved.to_string()),
                Err(e) => tracing::debug!("Skipping unresolvable href '{}': {}", href, e),
            }
        } else {
            links.push(href.to_string());
        }
    }

    links
}

/// The first `n` characters of `s`, cut on a char boundary
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
