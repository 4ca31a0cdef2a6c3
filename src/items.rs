//! Demo list items and the JSON-or-fallback loader
//!
//! The list screen gets its rows from a JSON file if one is present;
//! any failure to locate, read, or parse that file is absorbed here and
//! replaced with a generated placeholder list, so callers always get a
//! usable sequence.

use crate::constants::FALLBACK_ITEM_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// A single row of the demo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("file does not exist")]
    NotFound,
    #[error("failed to read file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("failed to parse items: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load the demo items from `path`, falling back to placeholder data on
/// any failure. Never fails: missing, unreadable, or malformed input is
/// logged and converted to the fallback list. A valid empty array is
/// returned as-is, not replaced.
pub fn load_items(path: &Path) -> Vec<ListItem> {
    match try_load(path) {
        Ok(items) => {
            debug!(path = %path.display(), count = items.len(), "Items loaded");
            items
        }
        Err(LoadError::NotFound) => {
            warn!(path = %path.display(), "Items file not found, using fallback");
            fallback_items()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load items, using fallback");
            fallback_items()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<ListItem>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound);
    }
    let raw = std::fs::read_to_string(path)?;
    let items = serde_json::from_str(&raw)?;
    Ok(items)
}

/// The placeholder list: "Item 1" through "Item 20".
pub fn fallback_items() -> Vec<ListItem> {
    (1..=FALLBACK_ITEM_COUNT)
        .map(|id| ListItem {
            id,
            title: format!("Item {}", id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_items_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("demo_items.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let items = load_items(&dir.path().join("does_not_exist.json"));

        assert_eq!(items.len(), 20);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, i as i64 + 1);
            assert_eq!(item.title, format!("Item {}", i + 1));
        }
    }

    #[test]
    fn invalid_json_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        for contents in ["", "not json at all", "[{\"id\": 1, \"title\""] {
            let path = write_items_file(&dir, contents);
            assert_eq!(load_items(&path), fallback_items());
        }
    }

    #[test]
    fn wrong_shape_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        // object instead of array, array of strings, missing/mistyped fields
        for contents in [
            "{\"id\": 1, \"title\": \"One\"}",
            "[\"a\", \"b\"]",
            "[{\"id\": 1}]",
            "[{\"id\": \"one\", \"title\": \"One\"}]",
            "[{\"title\": \"One\"}]",
        ] {
            let path = write_items_file(&dir, contents);
            assert_eq!(load_items(&path), fallback_items(), "contents: {contents}");
        }
    }

    #[test]
    fn valid_content_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_items_file(&dir, r#"[{"id":5,"title":"Five"},{"id":1,"title":"One"}]"#);

        let items = load_items(&path);
        assert_eq!(
            items,
            vec![
                ListItem { id: 5, title: "Five".into() },
                ListItem { id: 1, title: "One".into() },
            ]
        );
    }

    #[test]
    fn empty_array_is_valid_not_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_items_file(&dir, "[]");
        assert!(load_items(&path).is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_items_file(&dir, r#"[{"id":3,"title":"Three","subtitle":"extra"}]"#);

        let items = load_items(&path);
        assert_eq!(items, vec![ListItem { id: 3, title: "Three".into() }]);
    }

    #[test]
    fn large_document_loads_fully() {
        let dir = tempfile::tempdir().unwrap();
        let big: Vec<ListItem> = (0..1000)
            .map(|i| ListItem { id: i, title: format!("Row {}", i) })
            .collect();
        let path = write_items_file(&dir, &serde_json::to_string(&big).unwrap());

        assert_eq!(load_items(&path), big);
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_items_file(&dir, r#"[{"id":1,"title":"One"}]"#);

        assert_eq!(load_items(&path), load_items(&path));

        let missing = dir.path().join("missing.json");
        assert_eq!(load_items(&missing), load_items(&missing));
    }
}
