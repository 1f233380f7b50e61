//! Indented Markdown bullet list output.

use std::path::Path;

use treegen_core::{MetadataStore, TreeError, TreeNode};

use crate::Renderer;
use crate::reconstruct::reconstruct;

/// Renders the reconstructed tree as nested Markdown bullets.
///
/// The root is written as `name/` without a bullet, directories as `- name/`
/// and files as `- name`, indented two spaces per level.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    /// Order children directories-first, by name.
    pub sorted: bool,
}

impl MarkdownRenderer {
    /// Create a renderer.
    pub fn new(sorted: bool) -> Self {
        Self { sorted }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, root: &Path, store: &MetadataStore) -> Result<String, TreeError> {
        let mut tree = reconstruct(root, store)?;
        if self.sorted {
            tree.sort_children();
        }
        let mut out = String::new();
        write_node(&tree, 0, &mut out);
        Ok(out)
    }

    fn fallback(&self) -> &'static str {
        ""
    }
}

fn write_node(node: &TreeNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    if depth > 0 {
        out.push_str("- ");
    }
    out.push_str(&node.name);
    out.push_str("/\n");

    let child_indent = "  ".repeat(depth + 1);
    for child in node.children() {
        if child.is_dir() {
            write_node(child, depth + 1, out);
        } else {
            out.push_str(&child_indent);
            out.push_str("- ");
            out.push_str(&child.name);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use treegen_core::FileEntry;

    fn render(root: &Path, relative: &[&str], sorted: bool) -> String {
        let mut store = MetadataStore::new();
        for rel in relative {
            store.insert(FileEntry::new_file(root.join(rel)));
        }
        MarkdownRenderer::new(sorted).render(root, &store).unwrap()
    }

    #[test]
    fn test_nested_bullets_in_store_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let name = root.file_name().unwrap().to_string_lossy().to_string();

        let output = render(&root, &["src/lib.rs", "README.md", "src/bin/cli.rs"], false);
        let expected = format!(
            "{name}/\n  - README.md\n  - src/\n    - lib.rs\n    - bin/\n      - cli.rs\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_sorted_puts_directories_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let name = root.file_name().unwrap().to_string_lossy().to_string();

        let output = render(&root, &["b.txt", "a.txt", "src/lib.rs"], true);
        assert_eq!(output, format!("{name}/\n  - src/\n    - lib.rs\n  - a.txt\n  - b.txt\n"));
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let name = root.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(render(&root, &[], false), format!("{name}/\n"));
    }
}
