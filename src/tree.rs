//! The `FileTree` facade.

use std::path::Path;

use tracing::debug;

use treegen_core::{GenerateOptions, MetadataStore, OutputFormat, TreeError, TreeOptions};
use treegen_render::{render_or_fallback, renderer_for};
use treegen_scan::Scanner;

/// In-memory model of a filesystem subtree with on-demand rendering.
///
/// Filesystem failures during `init`, `set` and `remove` never surface: the
/// affected entry is simply absent. The only error a caller can observe is
/// an unsupported format passed to [`FileTree::generate`].
///
/// Mutation takes `&mut self`; hosts sharing one instance across threads
/// must wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    store: MetadataStore,
    options: TreeOptions,
}

impl FileTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `path` with `options`.
    ///
    /// The options are remembered for later renderings and the file counter
    /// restarts at zero. Entries from earlier scans are kept; call
    /// [`FileTree::clear`] first for a fresh model.
    pub fn init(&mut self, path: impl AsRef<Path>, options: TreeOptions) {
        let path = path.as_ref();
        self.options = options;
        self.store.reset_file_count();

        if self.options.max_files == Some(0) {
            debug!(path = %path.display(), "file quota is zero, skipping scan");
            return;
        }

        let scanner = Scanner::new(self.options.clone());
        match scanner.scan(path, &mut self.store) {
            Ok(recorded) => debug!(path = %path.display(), recorded, "scan complete"),
            Err(err) => debug!(path = %path.display(), error = %err, "scan root unavailable"),
        }
    }

    /// Add or refresh a single file. Directories and missing paths are ignored.
    pub fn set(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.store.set(path) {
            debug!(path = %path.display(), error = %err, "not recording path");
        }
    }

    /// Remove a path and everything stored below it.
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        self.store.remove(path);
    }

    /// Forget all entries and remembered options.
    pub fn clear(&mut self) {
        self.store.clear();
        self.options = TreeOptions::default();
    }

    /// Render the entries below `root` in the requested format.
    ///
    /// Fails only with [`TreeError::UnsupportedFormat`], before any rendering
    /// happens. Other failures yield the format's empty output.
    pub fn generate(
        &self,
        root: impl AsRef<Path>,
        options: &GenerateOptions,
    ) -> Result<String, TreeError> {
        let format = options.output_format()?;
        Ok(self.render(root, format, options.sorted))
    }

    /// Render with an already-parsed format.
    pub fn render(&self, root: impl AsRef<Path>, format: OutputFormat, sorted: bool) -> String {
        let renderer = renderer_for(format, self.options.show_hidden, sorted);
        render_or_fallback(renderer.as_ref(), root.as_ref(), &self.store)
    }

    /// The underlying metadata store.
    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// Options remembered from the last `init`.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }
}
