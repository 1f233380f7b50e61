//! Nested JSON output.

use std::path::Path;

use treegen_core::{MetadataStore, TreeError};

use crate::Renderer;
use crate::reconstruct::reconstruct;

/// Renders the reconstructed tree as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Order children directories-first, by name.
    pub sorted: bool,
}

impl JsonRenderer {
    /// Create a renderer.
    pub fn new(sorted: bool) -> Self {
        Self { sorted }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, root: &Path, store: &MetadataStore) -> Result<String, TreeError> {
        let mut tree = reconstruct(root, store)?;
        if self.sorted {
            tree.sort_children();
        }
        Ok(serde_json::to_string_pretty(&tree)?)
    }

    fn fallback(&self) -> &'static str {
        "{}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use treegen_core::FileEntry;

    #[test]
    fn test_empty_root_has_only_required_keys() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        let output = JsonRenderer::default().render(&root, &MetadataStore::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(value["type"], "directory");
        assert_eq!(value["path"], root.to_str().unwrap());
        assert_eq!(value["children"], serde_json::json!([]));
        assert!(output.contains("\n  \"name\""));
    }

    #[test]
    fn test_field_order_and_omitted_fields() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let mut store = MetadataStore::new();
        store.insert(FileEntry::new_file(root.join("notes.md")).with_size(12));
        store.insert(FileEntry::new_file(root.join("LICENSE")));

        let output = JsonRenderer::default().render(&root, &store).unwrap();

        let name = output.find("\"name\": \"notes.md\"").unwrap();
        let kind = output[name..].find("\"type\"").unwrap();
        let size = output[name..].find("\"size\": 12").unwrap();
        let ext = output[name..].find("\"extension\": \"md\"").unwrap();
        assert!(kind < size && size < ext);
        assert!(!output.contains("null"));
        assert!(!output.contains("\"modified\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_siblings() {
        use std::ffi::OsStr;
        use std::fs;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::write(root.join("good.txt"), "good").unwrap();
        let bad = root.join(OsStr::from_bytes(b"bad\xff.txt"));
        if fs::write(&bad, "bad").is_err() {
            // Filesystem rejects non-UTF-8 names.
            return;
        }

        let mut store = MetadataStore::new();
        store.set(root.join("good.txt")).unwrap();
        store.set(&bad).unwrap();

        let output = JsonRenderer::default().render(&root, &store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = value["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|child| child["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["good.txt", "bad\u{FFFD}.txt"]);
    }
}
