//! Heading-based sectioning of page text
//!
//! The extractor prefers a `<main>` region, then `<article>`, then a
//! `div.content`, falling back to the whole document. Within the region,
//! text is grouped into sections: a heading plus the text of its following
//! siblings up to the next h1-h4 heading. Pages without headings yield one
//! implicit section holding the region's visible text.

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

use super::chunker::{split_text_on_words, DEFAULT_MAX_LENGTH};
use super::node::{has_noise_ancestor, is_noise_tag, stripped_text, text_lines};

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("hardcoded selector 'main' is valid"));

static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("hardcoded selector 'article' is valid"));

static CONTENT_DIV_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.content").expect("hardcoded selector 'div.content' is valid")
});

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("hardcoded heading selector is valid")
});

/// Headings that end the sibling scan of a section. h5/h6 can start a
/// section but never terminate one; their text is absorbed into the
/// preceding section's content as an ordinary sibling.
const SECTION_TERMINATORS: &[&str] = &["h1", "h2", "h3", "h4"];

/// Extracts the page's main text, structured by headings and chunked
pub fn extract_text_content(document: &Html) -> String {
    let region = select_main_region(document);

    let headings: Vec<ElementRef<'_>> = match region {
        Some(region) => region
            .select(&HEADING_SELECTOR)
            .filter(|h| !has_noise_ancestor(**h))
            .collect(),
        None => document
            .select(&HEADING_SELECTOR)
            .filter(|h| !has_noise_ancestor(**h))
            .collect(),
    };

    let content = if headings.is_empty() {
        implicit_section(document, region)
    } else {
        let sections: String = headings.iter().map(|h| render_section(*h)).collect();
        if sections.is_empty() {
            "\n\n".to_string()
        } else {
            sections
        }
    };

    split_text_on_words(&content, DEFAULT_MAX_LENGTH)
}

/// Picks the main content region: `<main>`, else `<article>`, else
/// `div.content`; `None` means the whole document
fn select_main_region(document: &Html) -> Option<ElementRef<'_>> {
    for selector in [&*MAIN_SELECTOR, &*ARTICLE_SELECTOR, &*CONTENT_DIV_SELECTOR] {
        if let Some(region) = document
            .select(selector)
            .find(|el| !has_noise_ancestor(**el))
        {
            return Some(region);
        }
    }
    None
}

/// A heading-less region becomes one implicit section: the region's visible
/// text one line per block, prefixed with a blank separator line
fn implicit_section(document: &Html, region: Option<ElementRef<'_>>) -> String {
    let lines = match region {
        Some(region) => text_lines(*region),
        None => text_lines(document.tree.root()),
    };
    format!("\n\n{}", lines.join("\n"))
}

/// Renders one section: blank line, heading text, then newline-joined
/// sibling text up to the next terminating heading. Empty sections render
/// to nothing.
fn render_section(heading: ElementRef<'_>) -> String {
    let heading_text = stripped_text(*heading);

    let mut parts: Vec<String> = Vec::new();
    for sibling in heading.next_siblings() {
        match sibling.value() {
            Node::Element(element) => {
                if SECTION_TERMINATORS.contains(&element.name()) {
                    break;
                }
                if is_noise_tag(element.name()) {
                    continue;
                }
                let text = stripped_text(sibling);
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    parts.push(text.to_string());
                }
            }
            _ => {}
        }
    }
    let content_text = parts.join("\n");

    if heading_text.is_empty() && content_text.is_empty() {
        return String::new();
    }

    let mut section = format!("\n\n{}", heading_text);
    if !content_text.is_empty() {
        section.push('\n');
        section.push_str(&content_text);
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headings_yields_implicit_section() {
        let html = Html::parse_document(
            "<html><body><p>Hello world. Line two.</p></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nHello world. Line two.");
    }

    #[test]
    fn test_no_headings_multiple_blocks_one_line_each() {
        let html = Html::parse_document(
            "<html><body><p>First block.</p><p>Second block.</p></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nFirst block.\nSecond block.");
    }

    #[test]
    fn test_single_section() {
        let html = Html::parse_document(
            "<html><body><main><h1>Install</h1><p>Use the installer.</p></main></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nInstall\nUse the installer.");
    }

    #[test]
    fn test_sections_end_at_next_heading() {
        let html = Html::parse_document(
            "<html><body><main>\
             <h2>One</h2><p>first</p>\
             <h2>Two</h2><p>second</p>\
             </main></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nOne\nfirst\n\nTwo\nsecond");
    }

    #[test]
    fn test_h5_does_not_terminate_but_starts_section() {
        // An h5 between two paragraphs is swallowed into the h2's section
        // content, then also emits its own section.
        let html = Html::parse_document(
            "<html><body><main>\
             <h2>Top</h2><p>alpha</p>\
             <h5>Deep</h5><p>beta</p>\
             </main></body></html>",
        );
        assert_eq!(
            extract_text_content(&html),
            "\n\nTop\nalpha\nDeep\nbeta\n\nDeep\nbeta"
        );
    }

    #[test]
    fn test_heading_without_content() {
        let html = Html::parse_document(
            "<html><body><main><h1>Lonely</h1></main></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nLonely");
    }

    #[test]
    fn test_prefers_main_over_article() {
        let html = Html::parse_document(
            "<html><body>\
             <article><h1>Wrong</h1><p>article text</p></article>\
             <main><h1>Right</h1><p>main text</p></main>\
             </body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nRight\nmain text");
    }

    #[test]
    fn test_falls_back_to_content_div() {
        let html = Html::parse_document(
            "<html><body><div class=\"content\"><h1>Guide</h1><p>div text</p></div>\
             <p>outside</p></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nGuide\ndiv text");
    }

    #[test]
    fn test_nav_and_footer_ignored() {
        let html = Html::parse_document(
            "<html><body>\
             <nav><a href=\"/\">Home</a></nav>\
             <main><h1>Title</h1><p>body</p></main>\
             <footer>copyright</footer>\
             </body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nTitle\nbody");
    }

    #[test]
    fn test_headings_inside_nav_not_sections() {
        let html = Html::parse_document(
            "<html><body><nav><h2>Menu</h2></nav><p>Just text.</p></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nJust text.");
    }

    #[test]
    fn test_empty_page_yields_blank_section() {
        let html = Html::parse_document("<html><body></body></html>");
        assert_eq!(extract_text_content(&html), "\n\n");
    }

    #[test]
    fn test_inline_markup_in_heading_collapses() {
        let html = Html::parse_document(
            "<html><body><main><h1>The <code>crawl</code> command</h1><p>x</p></main></body></html>",
        );
        assert_eq!(extract_text_content(&html), "\n\nThecrawlcommand\nx");
    }
}
