//! Catalog module - Aggregate scan results and write the JSON artifacts
//!
//! Provides:
//! - build: hashing, classification, sorting and duplicate grouping
//! - store: data/tests.json and data/duplicates.json output

pub mod build;
pub mod store;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::core::model::{Catalog, Category};
use crate::core::paths::normalize_path;

/// Print the operator summary for a written catalog
fn print_summary(root: &Path, catalog: &Catalog, written: &store::WrittenFiles) {
    let rel = |p: &Path| {
        p.strip_prefix(root)
            .map(normalize_path)
            .unwrap_or_else(|_| normalize_path(p))
    };

    println!(
        "{} {} tests to {}",
        "Wrote".green().bold(),
        catalog.len(),
        rel(&written.tests)
    );

    let counts = catalog.category_counts();
    let breakdown: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}: {}", c, counts.get(c).copied().unwrap_or(0)))
        .collect();
    println!("  {}", breakdown.join(", ").dimmed());

    if catalog.duplicates.is_empty() {
        println!("No duplicate files found.");
    } else {
        println!(
            "{} {} duplicate groups, see {}",
            "Found".yellow().bold(),
            catalog.duplicates.len(),
            rel(&written.duplicates)
        );
    }
}

/// Run the full pipeline: discover, hash, classify, aggregate, write
pub fn run_build(root: &Path, quiet: bool) -> Result<()> {
    let catalog = build::build_catalog(root)?;
    let written = store::write_catalog(root, &catalog)?;

    tracing::info!(
        entries = catalog.len(),
        duplicate_groups = catalog.duplicates.len(),
        "catalog written"
    );

    if !quiet {
        print_summary(root, &catalog, &written);
    }

    Ok(())
}
