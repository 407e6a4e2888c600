//! Document records accumulated during a crawl
//!
//! The store is the crawl result: an append-only sequence of documents in
//! depth-first discovery order, owned by exactly one crawl run.

use std::collections::HashSet;

/// Canonical (fragment-stripped) URLs already fetched in this run
///
/// Grows monotonically and is never persisted across runs.
pub type VisitedSet = HashSet<String>;

/// One successfully fetched, eligible page
///
/// Immutable once created; the engine builds one per page and appends it to
/// the [`DocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawledDocument {
    /// Canonical URL the page was fetched from
    pub url: String,

    /// Page title, or the URL itself when the page has no title element
    pub title: String,

    /// Heading-structured, chunked text content
    pub content: String,

    /// Code samples in document order
    pub code_blocks: Vec<String>,

    /// Link hops from the seed at which this page was discovered
    pub depth: u32,

    /// Capture timestamp, formatted `YYYY-MM-DD HH:MM:SS`
    pub crawled_at: String,
}

/// Append-only ordered collection of crawled documents
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<CrawledDocument>,
}

impl DocumentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document; insertion order is discovery order
    pub fn push(&mut self, document: CrawledDocument) {
        self.documents.push(document);
    }

    /// Number of documents collected so far
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when no documents have been collected
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates documents in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &CrawledDocument> {
        self.documents.iter()
    }

    /// Consumes the store, yielding the documents in discovery order
    pub fn into_documents(self) -> Vec<CrawledDocument> {
        self.documents
    }
}
