//! treegen - scan a directory once, render it many times.
//!
//! [`FileTree`] owns an in-memory model of a filesystem subtree. Populate it
//! with [`FileTree::init`], adjust it with [`FileTree::set`] and
//! [`FileTree::remove`], then request ASCII tree, JSON or Markdown renderings
//! with [`FileTree::generate`] without touching the disk again.
//!
//! ```rust,no_run
//! use treegen::{FileTree, GenerateOptions, TreeOptions};
//!
//! let mut tree = FileTree::new();
//! tree.init(".", TreeOptions::builder().max_depth(3usize).build().unwrap());
//!
//! println!("{}", tree.generate(".", &GenerateOptions::new()).unwrap());
//! println!("{}", tree.generate(".", &GenerateOptions::new().with_format("json")).unwrap());
//! ```

mod tree;

pub use tree::FileTree;

// Re-export the types callers need
pub use treegen_core::{
    EntryKind, FileEntry, GenerateOptions, MetadataStore, OutputFormat, TreeError, TreeNode,
    TreeOptions, TreeOptionsBuilder,
};
