//! ASCII tree output with box-drawing connectors.

use std::path::Path;

use itertools::Itertools;
use treegen_core::{FileEntry, MetadataStore, TreeError, has_hidden_segment, paths_under_directory};

use crate::Renderer;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";

/// Renders the store as a `tree`-style listing.
///
/// Works directly on the flat store rather than a reconstructed tree. Each
/// listing shows its subdirectories first, then its files, both sorted by
/// name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer {
    /// Include entries with a `.`-prefixed segment below the root.
    pub show_hidden: bool,
}

impl AsciiRenderer {
    /// Create a renderer with the given hidden-entry policy.
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, root: &Path, store: &MetadataStore) -> Result<String, TreeError> {
        let root = root.canonicalize().map_err(|e| TreeError::io(root, e))?;
        let entries = store.entries_under(&root);
        if entries.is_empty() {
            return Ok(String::new());
        }

        let visible: Vec<&FileEntry> = entries
            .into_iter()
            .filter(|e| self.show_hidden || !has_hidden_segment(&root, &e.path))
            .collect();

        let mut lines = vec![".".to_string()];
        write_directory(&root, &visible, 0, &mut lines);
        Ok(lines.join("\n"))
    }

    fn fallback(&self) -> &'static str {
        ""
    }
}

/// Append the contents of `dir`, whose own line sits at `depth`.
fn write_directory(dir: &Path, entries: &[&FileEntry], depth: usize, lines: &mut Vec<String>) {
    let listing = paths_under_directory(dir, entries.iter().copied());
    let total = listing.len();
    let indent = VERTICAL.repeat(depth);
    let connector = |index: usize| if index + 1 == total { LAST_BRANCH } else { BRANCH };

    let subdirs = listing
        .subdirs
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b));
    let files = listing.files.into_iter().sorted_by(|a, b| a.name.cmp(&b.name));

    let mut index = 0;
    for (name, below) in subdirs {
        lines.push(format!("{indent}{}{name}", connector(index)));
        write_directory(&dir.join(name.as_str()), &below, depth + 1, lines);
        index += 1;
    }
    for file in files {
        lines.push(format!("{indent}{}{}", connector(index), file.name));
        index += 1;
    }
}
