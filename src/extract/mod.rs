//! Content extraction from parsed documentation pages
//!
//! Given a parsed HTML page, this module produces heading-structured text
//! (passed through the word-boundary chunker) and an ordered list of code
//! samples. Script, style, nav, footer, and header subtrees are treated as
//! navigation chrome and never contribute to either output.

mod chunker;
mod code;
mod node;
mod text;

pub use chunker::{split_text_on_words, DEFAULT_MAX_LENGTH};
pub use code::extract_code_blocks;
pub use text::extract_text_content;

use scraper::Html;

/// Structured content extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Heading-sectioned, chunked text
    pub content: String,

    /// Code samples in document order, `<pre>`-derived blocks first
    pub code_blocks: Vec<String>,
}

/// Extracts the structured content and code blocks from a parsed page
pub fn extract_page(document: &Html) -> ExtractedContent {
    ExtractedContent {
        content: text::extract_text_content(document),
        code_blocks: code::extract_code_blocks(document),
    }
}
