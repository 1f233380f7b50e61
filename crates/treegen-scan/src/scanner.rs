//! Depth-first directory scanner built on jwalk.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use treegen_core::{MetadataStore, TreeError, TreeOptions, entry_name};

/// Walks a directory tree and records every file it is allowed to see.
///
/// Traversal is serial and depth-first, visiting siblings in the order the
/// filesystem lists them. Symbolic links are neither followed nor recorded.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: TreeOptions,
}

impl Scanner {
    /// Create a scanner with the given options.
    pub fn new(options: TreeOptions) -> Self {
        Self { options }
    }

    /// Scan `root` into `store`, returning the number of files recorded.
    ///
    /// Failures on individual entries are logged and skipped. The error is
    /// only returned when `root` itself cannot be inspected.
    pub fn scan(&self, root: &Path, store: &mut MetadataStore) -> Result<usize, TreeError> {
        if self.options.quota_reached(store.file_count()) {
            return Ok(0);
        }

        let metadata = std::fs::metadata(root).map_err(|e| TreeError::io(root, e))?;

        if metadata.is_file() {
            return Ok(usize::from(self.record(root, store)));
        }
        if !metadata.is_dir() {
            return Ok(0);
        }

        let root = root.canonicalize().map_err(|e| TreeError::io(root, e))?;
        if self.options.should_ignore(&entry_name(&root)) || !self.options.may_descend(0) {
            return Ok(0);
        }

        let mut recorded = 0;
        for result in self.walker(&root) {
            if self.options.quota_reached(store.file_count()) {
                debug!(root = %root.display(), recorded, "file quota reached");
                break;
            }

            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }

            if self.record(&entry.path(), store) {
                recorded += 1;
            }
        }

        Ok(recorded)
    }

    /// Record a single file, logging and swallowing any failure.
    fn record(&self, path: &Path, store: &mut MetadataStore) -> bool {
        match store.set(path) {
            Ok(recorded) => recorded,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping file");
                false
            }
        }
    }

    /// Build the walker, pruning ignored directories while they are listed.
    fn walker(&self, root: &Path) -> WalkDir {
        let ignored: Arc<HashSet<String>> =
            Arc::new(self.options.ignore_dirs.iter().cloned().collect());

        let mut walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(false)
            .skip_hidden(!self.options.show_hidden)
            .follow_links(false)
            .min_depth(0)
            .process_read_dir(move |_depth, _path, _state, children| {
                for child in children.iter_mut().flatten() {
                    if child.file_type().is_dir()
                        && ignored.contains(child.file_name().to_string_lossy().as_ref())
                    {
                        child.read_children_path = None;
                    }
                }
            });

        if let Some(max_depth) = self.options.max_depth {
            walker = walker.max_depth(max_depth);
        }

        walker
    }
}
