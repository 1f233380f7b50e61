//! treegen - render a directory as an ASCII tree, JSON or Markdown.
//!
//! Usage:
//!   treegen [PATH]                     ASCII tree of PATH
//!   treegen [PATH] --format json       Nested JSON
//!   treegen [PATH] --format markdown   Markdown bullet list
//!   treegen --help                     Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use treegen::{FileTree, GenerateOptions, TreeOptions};

#[derive(Parser)]
#[command(
    name = "treegen",
    version,
    about = "Render a directory as an ASCII tree, JSON or Markdown",
    long_about = "treegen scans a directory once and prints it in the requested format.\n\n\
                  Hidden entries are skipped unless --hidden is given."
)]
struct Cli {
    /// Path to render (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format: tree, json or markdown
    #[arg(short, long, default_value = "tree")]
    format: String,

    /// Directory name to skip at any depth (repeatable)
    #[arg(short, long = "ignore", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Maximum number of files to record
    #[arg(short = 'n', long)]
    max_files: Option<usize>,

    /// Do not descend into directories at this depth or deeper
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Include entries starting with '.'
    #[arg(short = 'a', long)]
    hidden: bool,

    /// Order JSON and Markdown output directories-first, by name
    #[arg(short, long)]
    sorted: bool,

    /// Drop a path from the model after scanning (repeatable)
    #[arg(long, value_name = "PATH")]
    remove: Vec<PathBuf>,

    /// Print a file count and total size to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = TreeOptions::builder()
        .ignore_dirs(cli.ignore_dirs)
        .max_files(cli.max_files)
        .max_depth(cli.max_depth)
        .show_hidden(cli.hidden)
        .build()
        .context("Invalid scan options")?;

    let mut tree = FileTree::new();
    tree.init(&cli.path, options);
    for path in &cli.remove {
        tree.remove(path);
    }

    let generate = GenerateOptions::new()
        .with_format(cli.format)
        .with_sorted(cli.sorted);
    let output = tree.generate(&cli.path, &generate)?;

    if output.ends_with('\n') || output.is_empty() {
        print!("{output}");
    } else {
        println!("{output}");
    }

    if cli.stats {
        let store = tree.store();
        eprintln!(
            "{} files, {}",
            store.len(),
            humansize::format_size(store.total_size(), humansize::BINARY)
        );
    }

    Ok(())
}

/// Install a stderr subscriber honoring `RUST_LOG`, defaulting by verbosity.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
