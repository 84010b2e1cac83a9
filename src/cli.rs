//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// ielts-catalog - scan an IELTS HTML archive and write its JSON catalog.
#[derive(Parser, Debug)]
#[command(name = "ielts-catalog")]
#[command(
    author,
    version,
    about,
    long_about = r#"ielts-catalog walks ROOT for *.html practice tests and rebuilds two files:

- data/tests.json: every test with title, relative path, category, SHA-1 hash,
  size and modification time, sorted by title
- data/duplicates.json: groups of files whose content is byte-identical

index.html pages and anything under node_modules/ are skipped. Both files are
rewritten on every run. If no test file is found, nothing is written and the
command exits with a non-zero status.

Examples:
    ielts-catalog
    ielts-catalog --root ~/ielts-archive
    ielts-catalog --verbose
"#
)]
pub struct Cli {
    /// Root directory of the archive.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory of the archive (defaults to the current directory).\n\n\
Paths in the catalog are relative to this root, and the data/ directory is\n\
created under it."
    )]
    pub root: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no summary).
    #[arg(
        short,
        long,
        long_help = "Do not print the summary after writing. Errors are still reported on stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (per-file diagnostics).
    #[arg(
        short,
        long,
        long_help = "Log every cataloged file with its category and hash to stderr.\n\
RUST_LOG, when set, overrides this."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    crate::logging::init(cli.verbose, !cli.no_color);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    crate::catalog::run_build(&root, cli.quiet)
}
