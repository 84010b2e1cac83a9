//! Path normalization utilities
//!
//! Ensures all catalog paths use '/' as separator and are relative to root.

use std::path::{Path, PathBuf};

/// Directory (under root) that receives the generated JSON files
pub const DATA_DIR: &str = "data";

/// Catalog of test metadata
pub const TESTS_FILE: &str = "tests.json";

/// Duplicate-content report
pub const DUPLICATES_FILE: &str = "duplicates.json";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Get the data directory for a given root
pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

/// File name without its last extension
pub fn title_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
