//! Hierarchical nodes rebuilt from the flat store for structured output.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::entry::{EntryKind, FileEntry, serialize_path_lossy};

/// A file or directory in a reconstructed tree.
///
/// Field order is the serialized order. Optional attributes are omitted
/// rather than written as `null`; only directories carry `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// File/directory name (not full path).
    pub name: CompactString,

    /// Node type.
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Absolute path, written lossily when it is not valid UTF-8.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,

    /// Size in bytes (files only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Last modification time (files only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// File extension (files only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<CompactString>,

    /// Child nodes (directories only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Create an empty directory node.
    pub fn new_directory(name: impl Into<CompactString>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            path: path.into(),
            size: None,
            modified: None,
            extension: None,
            children: Some(Vec::new()),
        }
    }

    /// Create a leaf node from a stored file entry.
    pub fn from_entry(entry: &FileEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind,
            path: entry.path.clone(),
            size: entry.size,
            modified: entry.modified,
            extension: entry.extension.clone(),
            children: None,
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Child nodes, empty for files.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Append a child to a directory node. Ignored on files.
    pub fn push_child(&mut self, child: TreeNode) {
        if let Some(children) = self.children.as_mut() {
            children.push(child);
        }
    }

    /// Count file nodes in this subtree.
    pub fn file_count(&self) -> usize {
        match &self.children {
            Some(children) => children.iter().map(TreeNode::file_count).sum(),
            None => 1,
        }
    }

    /// Sort children recursively: directories first, then by name.
    pub fn sort_children(&mut self) {
        if let Some(children) = self.children.as_mut() {
            children.sort_by(|a, b| {
                b.is_dir()
                    .cmp(&a.is_dir())
                    .then_with(|| a.name.cmp(&b.name))
            });
            for child in children {
                child.sort_children();
            }
        }
    }
}
