//! HTML test discovery
//!
//! Uses walkdir for recursive traversal. Excluded directories are pruned
//! before descending, so their subtrees are never read.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File names that are never catalog entries (the archive's own landing page)
pub const IGNORE_FILES: &[&str] = &["index.html"];

/// Directory names whose whole subtree is skipped
pub const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Candidate file suffix
pub const HTML_SUFFIX: &str = ".html";

/// Lazily enumerate candidate HTML files under `root`.
///
/// Directories are visited in file-name order; the sequence is single-use.
pub fn discover_html_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| is_candidate(entry.path()))
        .map(DirEntry::into_path)
}

fn is_excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    EXCLUDED_DIRS.iter().any(|dir| *dir == name)
}

/// Check whether a path is a catalog candidate: `*.html`, not ignored, a regular file.
///
/// Symlinks count when they resolve to a regular file.
pub fn is_candidate(path: &Path) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };

    if !name.ends_with(HTML_SUFFIX) {
        return false;
    }
    if IGNORE_FILES.iter().any(|ignored| *ignored == name) {
        return false;
    }

    path.is_file()
}
