use crate::store::VisitedSet;
use crate::url::extract_domain;
use url::Url;

/// File extensions that never hold documentation content
const SKIP_EXTENSIONS: &[&str] = &[".pdf", ".zip", ".jpg", ".png", ".gif", ".css", ".js"];

/// Removes the fragment (`#...`) from a URL string
///
/// The fragment-stripped form is the canonical key for deduplication: two
/// URLs differing only in their fragment are the same page.
pub fn strip_fragment(url: &str) -> &str {
    match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Decides whether a discovered URL is eligible to crawl
///
/// Pure with respect to the configuration and the current visited set; the
/// engine is responsible for inserting accepted URLs into the set before
/// descending into them. Rules, in order:
///
/// 1. The URL must parse and its domain must equal the seed's domain.
/// 2. Its path must not end with a known non-document extension.
/// 3. After fragment stripping, it must not already be in the visited set.
pub fn is_eligible(url: &str, base_domain: &str, visited: &VisitedSet) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Skipping {}: not a valid URL ({})", url, e);
            return false;
        }
    };

    // Only crawl the seed's domain
    match extract_domain(&parsed) {
        Some(domain) if domain == base_domain => {}
        _ => {
            tracing::debug!("Skipping {}: different domain", url);
            return false;
        }
    }

    // Skip common non-documentation files
    let path = parsed.path().to_lowercase();
    if SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        tracing::debug!("Skipping {}: excluded extension", url);
        return false;
    }

    !visited.contains(strip_fragment(url))
}
