//! Core types for treegen.
//!
//! This crate provides the flat metadata store that every other crate reads
//! from, the entry and node types, scan and generation configuration, and the
//! error taxonomy shared across the workspace.

mod config;
mod entry;
mod error;
mod listing;
mod node;
mod store;

pub use config::{GenerateOptions, OutputFormat, TreeOptions, TreeOptionsBuilder};
pub use entry::{EntryKind, FileEntry, entry_name, extension_of};
pub use error::TreeError;
pub use listing::{DirectoryListing, has_hidden_segment, paths_under_directory};
pub use node::TreeNode;
pub use store::MetadataStore;
