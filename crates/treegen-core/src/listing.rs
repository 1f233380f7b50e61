//! Grouping of flat entries into the direct contents of one directory.
//!
//! Directories are never stored; they exist only as path prefixes of file
//! entries. Both the tree reconstructor and the ASCII walker derive each
//! directory level through [`paths_under_directory`].

use std::path::{Component, Path};

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::entry::FileEntry;

/// Direct contents of a directory, in discovery order.
#[derive(Debug, Default)]
pub struct DirectoryListing<'a> {
    /// Files whose parent is the directory itself.
    pub files: Vec<&'a FileEntry>,

    /// First-level subdirectory names, each with every entry beneath it.
    pub subdirs: IndexMap<CompactString, Vec<&'a FileEntry>>,
}

impl<'a> DirectoryListing<'a> {
    /// Check if the directory has no visible contents.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirs.is_empty()
    }

    /// Number of direct items (files plus subdirectories).
    pub fn len(&self) -> usize {
        self.files.len() + self.subdirs.len()
    }
}

/// Partition the entries below `dir` into direct files and subdirectories.
///
/// Entries not strictly below `dir` are skipped. Matching is component-wise,
/// so `/a/bc` is never treated as lying under `/a/b`.
pub fn paths_under_directory<'a, I>(dir: &Path, entries: I) -> DirectoryListing<'a>
where
    I: IntoIterator<Item = &'a FileEntry>,
{
    let mut listing = DirectoryListing::default();

    for entry in entries {
        let Ok(relative) = entry.path.strip_prefix(dir) else {
            continue;
        };
        let mut components = relative.components().filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        });
        let Some(first) = components.next() else {
            continue;
        };

        if components.next().is_none() {
            listing.files.push(entry);
        } else {
            listing
                .subdirs
                .entry(CompactString::new(first.to_string_lossy()))
                .or_default()
                .push(entry);
        }
    }

    listing
}

/// Check whether any segment of `path` below `root` starts with `.`.
pub fn has_hidden_segment(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root).is_ok_and(|relative| {
        relative
            .components()
            .any(|c| matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.')))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<FileEntry> {
        paths.iter().map(|p| FileEntry::new_file(*p)).collect()
    }

    #[test]
    fn test_partition_files_and_subdirs() {
        let all = entries(&["/r/a.txt", "/r/sub/b.txt", "/r/sub/deep/c.txt", "/r/other/d.txt"]);
        let listing = paths_under_directory(Path::new("/r"), &all);

        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name.as_str(), "a.txt");

        let names: Vec<&str> = listing.subdirs.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["sub", "other"]);
        assert_eq!(listing.subdirs["sub"].len(), 2);
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn test_sibling_prefix_is_not_a_child() {
        let all = entries(&["/r/sub/b.txt", "/r/subway/c.txt"]);
        let listing = paths_under_directory(Path::new("/r/sub"), &all);

        assert_eq!(listing.files.len(), 1);
        assert!(listing.subdirs.is_empty());
    }

    #[test]
    fn test_directory_itself_is_skipped() {
        let all = entries(&["/r"]);
        let listing = paths_under_directory(Path::new("/r"), &all);
        assert!(listing.is_empty());
    }

    #[test]
    fn test_has_hidden_segment() {
        let root = Path::new("/home/.config/r");
        assert!(!has_hidden_segment(root, Path::new("/home/.config/r/a.txt")));
        assert!(has_hidden_segment(root, Path::new("/home/.config/r/.git/HEAD")));
        assert!(has_hidden_segment(root, Path::new("/home/.config/r/.env")));
    }
}
