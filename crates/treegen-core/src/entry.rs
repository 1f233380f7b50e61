//! Flat file entries kept in the metadata store.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize, Serializer};

/// Type of a file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// Metadata recorded for a single file, keyed by its canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Base name (last path segment).
    pub name: CompactString,

    /// Absolute, canonical path.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,

    /// Entry type.
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Containing directory.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_parent_lossy"
    )]
    pub parent: Option<PathBuf>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Text after the last `.` of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<CompactString>,
}

impl FileEntry {
    /// Create a file entry for a canonical path with no size or timestamp.
    pub fn new_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = entry_name(&path);
        let extension = extension_of(&name);
        Self {
            parent: path.parent().map(Path::to_path_buf),
            name,
            path,
            kind: EntryKind::File,
            size: None,
            modified: None,
            extension,
        }
    }

    /// Create a file entry from a canonical path and its metadata.
    pub fn from_metadata(path: impl Into<PathBuf>, metadata: &Metadata) -> Self {
        let mut entry = Self::new_file(path);
        entry.size = Some(metadata.len());
        entry.modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        entry
    }

    /// Set the size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if `self.path` lies strictly below `dir`.
    pub fn is_descendant_of(&self, dir: &Path) -> bool {
        self.path != dir && self.path.starts_with(dir)
    }
}

/// Last segment of a path, or the whole path when it has none.
pub fn entry_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

/// Write a path as a string, replacing invalid UTF-8 with U+FFFD.
pub(crate) fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn serialize_parent_lossy<S: Serializer>(
    parent: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match parent {
        Some(path) => serialize_path_lossy(path, serializer),
        None => serializer.serialize_none(),
    }
}

/// Extension of a file name: the non-empty text after its last `.`.
pub fn extension_of(name: &str) -> Option<CompactString> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(CompactString::new)
}
