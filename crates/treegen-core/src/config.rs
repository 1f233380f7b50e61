//! Scan and generation configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::TreeError;

/// Options controlling a scan.
///
/// Every field is optional. Deserializes from camelCase keys
/// (`ignoreDirs`, `maxFiles`, `showHidden`, `maxDepth`) so host configs can be
/// passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default, build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase", default)]
pub struct TreeOptions {
    /// Directory names pruned at any depth (exact basename match).
    pub ignore_dirs: Vec<String>,

    /// Maximum number of file entries recorded (None = unlimited).
    pub max_files: Option<usize>,

    /// Record and descend into entries starting with `.`.
    pub show_hidden: bool,

    /// Directories at this depth or deeper are not descended into
    /// (None = unlimited, root = depth 0).
    pub max_depth: Option<usize>,
}

impl TreeOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref dirs) = self.ignore_dirs {
            for name in dirs {
                if name.is_empty() {
                    return Err("Ignored directory name cannot be empty".to_string());
                }
                if name.contains(std::path::is_separator) {
                    return Err(format!(
                        "Ignored directory must be a name, not a path: {name}"
                    ));
                }
            }
        }
        Ok(())
    }
}

impl TreeOptions {
    /// Create a new options builder.
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::default()
    }

    /// Check if a directory with this name is on the ignore list.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }

    /// Check if an entry with this name is skipped as hidden.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.show_hidden && name.starts_with('.')
    }

    /// Check if `count` recorded files exhaust the quota.
    pub fn quota_reached(&self, count: usize) -> bool {
        self.max_files.is_some_and(|max| count >= max)
    }

    /// Whether a directory at `depth` may be listed.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

/// Output formats understood by `generate`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ASCII tree with box-drawing connectors.
    #[default]
    Tree,
    /// Nested pretty-printed JSON.
    Json,
    /// Indented Markdown bullet list.
    Markdown,
}

impl OutputFormat {
    /// Parse a format name, reporting unknown names as `UnsupportedFormat`.
    pub fn parse(name: &str) -> Result<Self, TreeError> {
        name.parse().map_err(|_| TreeError::UnsupportedFormat {
            format: name.to_string(),
        })
    }
}

/// Options for a single `generate` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Format name; `None` or an empty name selects `tree`.
    pub format: Option<String>,

    /// Sort JSON and Markdown output directories-first, by name.
    pub sorted: bool,
}

impl GenerateOptions {
    /// Options for the default `tree` format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an output format by name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Enable uniform directories-first ordering.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Resolve the requested format.
    pub fn output_format(&self) -> Result<OutputFormat, TreeError> {
        match self.format.as_deref().filter(|name| !name.is_empty()) {
            None => Ok(OutputFormat::default()),
            Some(name) => OutputFormat::parse(name),
        }
    }
}
