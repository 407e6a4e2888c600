//! Output rendering for crawl results
//!
//! Serializes the document store into the wire schema consumed by
//! downstream indexers. Each document carries its code blocks twice: once
//! at the top level and once inside `metadata`, which older consumers still
//! read. The whole result is wrapped as `{"docs": [...], "status":
//! "success"}` and written as pretty-printed UTF-8 JSON.

use crate::store::{CrawledDocument, DocumentStore};
use crate::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct DocumentJson<'a> {
    url: &'a str,
    title: &'a str,
    content: &'a str,
    code_blocks: &'a [String],
    metadata: MetadataJson<'a>,
}

#[derive(Serialize)]
struct MetadataJson<'a> {
    // Duplicated at the top level; kept for backward compatibility
    code_blocks: &'a [String],
    depth: u32,
    crawled_at: &'a str,
}

#[derive(Serialize)]
struct CrawlResultJson<'a> {
    docs: Vec<DocumentJson<'a>>,
    status: &'a str,
}

fn document_json(document: &CrawledDocument) -> DocumentJson<'_> {
    DocumentJson {
        url: &document.url,
        title: &document.title,
        content: &document.content,
        code_blocks: &document.code_blocks,
        metadata: MetadataJson {
            code_blocks: &document.code_blocks,
            depth: document.depth,
            crawled_at: &document.crawled_at,
        },
    }
}

/// Renders the crawl result wrapper as pretty-printed JSON
pub fn render_result(store: &DocumentStore) -> Result<String> {
    let result = CrawlResultJson {
        docs: store.iter().map(document_json).collect(),
        status: "success",
    };
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Writes the rendered result to `path`, creating parent directories
///
/// Returns the rendered JSON so the caller can echo it to stdout.
pub fn write_result(store: &DocumentStore, path: &Path) -> Result<String> {
    let json = render_result(store)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &json)?;

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> DocumentStore {
        let mut store = DocumentStore::new();
        store.push(CrawledDocument {
            url: "https://docs.example.com/guide".to_string(),
            title: "Guide".to_string(),
            content: "\n\nGuide\nbody text".to_string(),
            code_blocks: vec!["print(1)".to_string()],
            depth: 1,
            crawled_at: "2025-06-01 12:00:00".to_string(),
        });
        store
    }

    #[test]
    fn test_schema_shape() {
        let json = render_result(&sample_store()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "success");
        let doc = &value["docs"][0];
        assert_eq!(doc["url"], "https://docs.example.com/guide");
        assert_eq!(doc["title"], "Guide");
        assert_eq!(doc["content"], "\n\nGuide\nbody text");
        assert_eq!(doc["code_blocks"][0], "print(1)");
        assert_eq!(doc["metadata"]["code_blocks"][0], "print(1)");
        assert_eq!(doc["metadata"]["depth"], 1);
        assert_eq!(doc["metadata"]["crawled_at"], "2025-06-01 12:00:00");
    }

    #[test]
    fn test_empty_store_renders() {
        let store = DocumentStore::new();
        let json = render_result(&store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["docs"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/result.json");

        let json = write_result(&sample_store(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, json);
    }
}
