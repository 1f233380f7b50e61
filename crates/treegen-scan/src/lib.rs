//! Directory scanning engine for treegen.
//!
//! This crate walks a directory tree with jwalk and records every regular
//! file it finds into a [`MetadataStore`].
//!
//! # Overview
//!
//! - **Depth-first, serial** traversal in native listing order
//! - **Pruning** by directory name, depth and a global file quota
//! - **Hidden entries** skipped unless `show_hidden` is set
//! - **Per-entry failures** are logged and skipped, never fatal
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use treegen_scan::{MetadataStore, Scanner, TreeOptions};
//!
//! let options = TreeOptions::builder()
//!     .ignore_dirs(vec!["target".to_string()])
//!     .max_depth(4usize)
//!     .build()
//!     .unwrap();
//!
//! let mut store = MetadataStore::new();
//! let recorded = Scanner::new(options).scan(Path::new("."), &mut store).unwrap();
//! println!("Recorded {recorded} files");
//! ```

mod scanner;

pub use scanner::Scanner;

// Re-export core types for convenience
pub use treegen_core::{FileEntry, MetadataStore, TreeError, TreeOptions};
