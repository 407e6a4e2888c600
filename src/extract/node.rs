//! Text collection over the parse tree
//!
//! scraper exposes pages as a tree of tagged nodes (element, text, comment,
//! ...). The helpers here walk that tree collecting text fragments while
//! suppressing noise subtrees, and are shared by the section and code
//! extractors. Dispatch is always on the node tag, never on probing for
//! capabilities.

use ego_tree::NodeRef;
use scraper::Node;

/// Elements whose subtrees are navigation/non-content noise
pub(super) const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

pub(super) fn is_noise_tag(name: &str) -> bool {
    NOISE_TAGS.contains(&name)
}

/// True when any ancestor element of `node` is a noise element
pub(super) fn has_noise_ancestor(node: NodeRef<'_, Node>) -> bool {
    node.ancestors()
        .filter_map(|a| a.value().as_element())
        .any(|el| is_noise_tag(el.name()))
}

/// True when any ancestor element of `node` is a `<pre>`
pub(super) fn has_pre_ancestor(node: NodeRef<'_, Node>) -> bool {
    node.ancestors()
        .filter_map(|a| a.value().as_element())
        .any(|el| el.name() == "pre")
}

/// Collects the raw text fragments beneath `node` in document order,
/// skipping noise subtrees entirely
pub(super) fn collect_fragments<'a>(node: NodeRef<'a, Node>, out: &mut Vec<&'a str>) {
    match node.value() {
        Node::Text(text) => out.push(&*text.text),
        Node::Element(element) if is_noise_tag(element.name()) => {}
        _ => {
            for child in node.children() {
                collect_fragments(child, out);
            }
        }
    }
}

/// Concatenation of all fragments with each fragment trimmed
///
/// Mirrors how inline markup collapses: `Hello <em>world</em>` becomes
/// `Helloworld` when the fragments carry no surrounding whitespace of their
/// own. Headings and sibling blocks are joined this way.
pub(super) fn stripped_text(node: NodeRef<'_, Node>) -> String {
    let mut fragments = Vec::new();
    collect_fragments(node, &mut fragments);
    fragments
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Concatenation of all fragments verbatim, trimmed only at the ends
///
/// Internal whitespace survives, which is what code samples need.
pub(super) fn raw_text(node: NodeRef<'_, Node>) -> String {
    let mut fragments = Vec::new();
    collect_fragments(node, &mut fragments);
    fragments.concat().trim().to_string()
}

/// All non-blank lines beneath `node`, one line per text block
pub(super) fn text_lines(node: NodeRef<'_, Node>) -> Vec<String> {
    let mut fragments = Vec::new();
    collect_fragments(node, &mut fragments);

    let mut lines = Vec::new();
    for fragment in fragments {
        for line in fragment.lines() {
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
    }
    lines
}
