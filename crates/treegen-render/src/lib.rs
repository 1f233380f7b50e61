//! Tree reconstruction and output renderers for treegen.
//!
//! Three independent strategies turn a [`MetadataStore`] into text:
//!
//! - **ASCII tree** ([`AsciiRenderer`]) - `tree`-style glyphs, walked straight
//!   from the flat store, directories first and sorted by name
//! - **JSON** ([`JsonRenderer`]) - the reconstructed [`TreeNode`] hierarchy,
//!   pretty-printed
//! - **Markdown** ([`MarkdownRenderer`]) - nested bullet list of the
//!   reconstructed hierarchy
//!
//! Renderers return `Result`; [`render_or_fallback`] is the boundary that
//! replaces any failure with the format's empty output.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use treegen_core::{MetadataStore, OutputFormat};
//! use treegen_render::{render_or_fallback, renderer_for};
//!
//! let store = MetadataStore::new();
//! let renderer = renderer_for(OutputFormat::Markdown, false, false);
//! println!("{}", render_or_fallback(renderer.as_ref(), Path::new("."), &store));
//! ```

mod ascii;
mod json;
mod markdown;
mod reconstruct;

use std::path::Path;

use tracing::debug;
use treegen_core::{MetadataStore, OutputFormat, TreeError};

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use reconstruct::reconstruct;

// Re-export core types
pub use treegen_core::TreeNode;

/// An output strategy over the flat store.
pub trait Renderer {
    /// Render everything stored below `root`.
    fn render(&self, root: &Path, store: &MetadataStore) -> Result<String, TreeError>;

    /// Output used in place of a failed rendering.
    fn fallback(&self) -> &'static str;
}

/// Create the renderer for a format.
pub fn renderer_for(format: OutputFormat, show_hidden: bool, sorted: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Tree => Box::new(AsciiRenderer::new(show_hidden)),
        OutputFormat::Json => Box::new(JsonRenderer::new(sorted)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(sorted)),
    }
}

/// Render, degrading to the renderer's fallback output on any error.
pub fn render_or_fallback(renderer: &dyn Renderer, root: &Path, store: &MetadataStore) -> String {
    match renderer.render(root, store) {
        Ok(output) => output,
        Err(err) => {
            debug!(root = %root.display(), error = %err, "rendering failed, using fallback");
            renderer.fallback().to_string()
        }
    }
}
