//! URL handling module for docsweep
//!
//! This module decides which discovered URLs are eligible to crawl: domain
//! containment, non-document extension filtering, fragment stripping, and
//! deduplication against the visited set.

mod domain;
mod policy;

// Re-export main functions
pub use domain::extract_domain;
pub use policy::{is_eligible, strip_fragment};
