//! Code sample extraction
//!
//! Two passes over the whole page, both order-preserving: every `<pre>`
//! element first (nested markup flattened, internal whitespace kept), then
//! every `<code>` element that is not inside a `<pre>`, so nothing is
//! captured twice.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::node::{has_noise_ancestor, has_pre_ancestor, raw_text};

static PRE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("pre").expect("hardcoded selector 'pre' is valid"));

static CODE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("code").expect("hardcoded selector 'code' is valid"));

/// Extracts all code samples from the page in document order
pub fn extract_code_blocks(document: &Html) -> Vec<String> {
    let mut blocks = Vec::new();

    for pre in document.select(&PRE_SELECTOR) {
        if has_noise_ancestor(*pre) {
            continue;
        }
        let text = raw_text(*pre);
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    for code in document.select(&CODE_SELECTOR) {
        if has_pre_ancestor(*code) || has_noise_ancestor(*code) {
            continue;
        }
        let text = raw_text(*code);
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    blocks
}
