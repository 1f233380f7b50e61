//! Flat metadata store keyed by canonical path.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::trace;

use crate::entry::FileEntry;
use crate::error::TreeError;

/// The single source of truth: canonical path to file entry.
///
/// Iteration follows insertion order. Overwriting a key keeps its original
/// position and removals keep the relative order of the remaining entries,
/// so renderings of an unchanged store are reproducible.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: IndexMap<PathBuf, FileEntry>,
    file_count: usize,
}

impl MetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stat `path` and record it if it is a regular file.
    ///
    /// Returns `Ok(true)` when an entry was inserted or overwritten and
    /// `Err(TreeError::NotAFile)` for directories and special files.
    pub fn set(&mut self, path: impl AsRef<Path>) -> Result<bool, TreeError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| TreeError::io(path, e))?;
        if !metadata.is_file() {
            return Err(TreeError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let canonical = path.canonicalize().map_err(|e| TreeError::io(path, e))?;
        trace!(path = %canonical.display(), size = metadata.len(), "recording file");
        self.insert(FileEntry::from_metadata(canonical, &metadata));
        Ok(true)
    }

    /// Insert or overwrite an entry under its own path and count it.
    pub fn insert(&mut self, entry: FileEntry) {
        self.entries.insert(entry.path.clone(), entry);
        self.file_count += 1;
    }

    /// Remove `path` and everything below it. Returns the number removed.
    ///
    /// Falls back to the literal path when it can no longer be canonicalized.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(&target));
        let removed = before - self.entries.len();
        trace!(path = %target.display(), removed, "removed entries");
        removed
    }

    /// Empty the store and reset the file counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.file_count = 0;
    }

    /// Reset the running file counter without touching entries.
    pub fn reset_file_count(&mut self) {
        self.file_count = 0;
    }

    /// Files recorded since the counter was last reset.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Look up an entry by canonical path.
    pub fn get(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    /// Check if an entry exists for this canonical path.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    /// Entries strictly below `root`, in store order.
    pub fn entries_under(&self, root: &Path) -> Vec<&FileEntry> {
        self.iter().filter(|e| e.is_descendant_of(root)).collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of recorded file sizes.
    pub fn total_size(&self) -> u64 {
        self.iter().filter_map(|e| e.size).sum()
    }
}
