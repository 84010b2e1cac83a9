//! ielts-catalog - Build the JSON catalog of an IELTS practice-test archive
//!
//! ielts-catalog provides:
//! - Recursive discovery of `*.html` test files
//! - SHA-1 content hashing for duplicate detection
//! - Keyword-based listening/reading/writing classification
//! - data/tests.json and data/duplicates.json output

use anyhow::Result;
use clap::Parser;

mod backends;
mod catalog;
mod classify;
mod cli;
mod core;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
