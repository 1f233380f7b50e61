//! Rebuild a node hierarchy from the flat store.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use treegen_core::{FileEntry, MetadataStore, TreeError, TreeNode, entry_name, paths_under_directory};

/// Reconstruct the tree under `root` from the entries in `store`.
///
/// Directories are inferred from file paths, so a directory without any file
/// below it never appears. Within a directory, files come first in store
/// order, followed by subdirectories in the order they were first seen.
pub fn reconstruct(root: &Path, store: &MetadataStore) -> Result<TreeNode, TreeError> {
    let canonical = root.canonicalize().map_err(|e| TreeError::io(root, e))?;
    let entries = store.entries_under(&canonical);
    Ok(build_directory(entry_name(root), canonical, &entries))
}

fn build_directory(name: CompactString, path: PathBuf, entries: &[&FileEntry]) -> TreeNode {
    let listing = paths_under_directory(&path, entries.iter().copied());
    let mut node = TreeNode::new_directory(name, path.clone());

    for file in &listing.files {
        node.push_child(TreeNode::from_entry(file));
    }

    for (subdir, below) in listing.subdirs {
        let subdir_path = path.join(subdir.as_str());
        node.push_child(build_directory(subdir, subdir_path, &below));
    }

    node
}
