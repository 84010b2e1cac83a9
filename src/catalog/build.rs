//! Catalog aggregation
//!
//! Drives discovery fully into a list, then hashes and classifies each file
//! and groups entries by digest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::backends::scan::discover_html_files;
use crate::classify::detect_category;
use crate::core::error::{CatalogError, Result};
use crate::core::model::{Catalog, DuplicateGroup, TestEntry};
use crate::core::paths::{make_relative, normalize_path, title_of};
use crate::core::util::{hash_file, mtime_secs};

/// Build a single entry for a discovered file
pub fn build_entry(path: &Path, root: &Path) -> Result<TestEntry> {
    let file = make_relative(path, root).unwrap_or_else(|| normalize_path(path));

    let hash = hash_file(path).map_err(|source| CatalogError::Hash {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = std::fs::metadata(path).map_err(|source| CatalogError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = mtime_secs(&metadata).map_err(|source| CatalogError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let category = detect_category(path);
    tracing::debug!(file = %file, %category, %hash, "cataloged");

    Ok(TestEntry {
        title: title_of(path),
        file,
        category,
        hash,
        size: metadata.len(),
        modified,
    })
}

/// Sort entries by case-insensitive title, ties by relative path
pub fn sort_entries(entries: &mut [TestEntry]) {
    entries.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.file.cmp(&b.file))
    });
}

/// Group entries by hash, keeping only groups with two or more files.
///
/// Groups come out ordered by hash; files within a group are sorted.
pub fn find_duplicates(entries: &[TestEntry]) -> Vec<DuplicateGroup> {
    let mut by_hash: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for entry in entries {
        by_hash
            .entry(entry.hash.as_str())
            .or_default()
            .push(entry.file.clone());
    }

    by_hash
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(hash, mut files)| {
            files.sort();
            DuplicateGroup {
                hash: hash.to_string(),
                files,
            }
        })
        .collect()
}

/// Scan `root` and build the full catalog.
///
/// Fails with `NoHtmlFiles` when nothing is discovered, and on the first file
/// that cannot be hashed.
pub fn build_catalog(root: &Path) -> Result<Catalog> {
    let files: Vec<PathBuf> = discover_html_files(root).collect();
    if files.is_empty() {
        return Err(CatalogError::NoHtmlFiles {
            root: root.to_path_buf(),
        });
    }
    tracing::debug!(count = files.len(), "discovered html files");

    let mut entries = files
        .iter()
        .map(|path| build_entry(path, root))
        .collect::<Result<Vec<_>>>()?;

    sort_entries(&mut entries);
    let duplicates = find_duplicates(&entries);

    Ok(Catalog {
        entries,
        duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn entry(title: &str, file: &str, hash: &str) -> TestEntry {
        TestEntry {
            title: title.to_string(),
            file: file.to_string(),
            category: Category::Other,
            hash: hash.to_string(),
            size: 1,
            modified: 0.0,
        }
    }

    #[test]
    fn test_build_catalog_empty() {
        let temp = tempdir().unwrap();
        write(temp.path(), "index.html", "<html></html>");

        let err = build_catalog(temp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::NoHtmlFiles { .. }));
    }

    #[test]
    fn test_build_entry_fields() {
        let temp = tempdir().unwrap();
        write(temp.path(), "cam15/Listening Test 1.html", "<p>abc</p>");

        let path = temp.path().join("cam15/Listening Test 1.html");
        let entry = build_entry(&path, temp.path()).unwrap();

        assert_eq!(entry.title, "Listening Test 1");
        assert_eq!(entry.file, "cam15/Listening Test 1.html");
        assert_eq!(entry.category, Category::Listening);
        assert_eq!(entry.hash, crate::core::util::hash_bytes(b"<p>abc</p>"));
        assert_eq!(entry.size, 10);
        assert!(entry.modified > 0.0);
    }

    #[test]
    fn test_build_entry_unreadable_is_fatal() {
        let temp = tempdir().unwrap();
        let err = build_entry(&temp.path().join("missing.html"), temp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Hash { .. }));
    }

    #[test]
    fn test_sort_entries_case_insensitive() {
        let mut entries = vec![
            entry("beta", "beta.html", "1"),
            entry("Alpha", "Alpha.html", "2"),
            entry("alpha", "x/alpha.html", "3"),
            entry("Gamma", "Gamma.html", "4"),
        ];
        sort_entries(&mut entries);

        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "alpha", "beta", "Gamma"]);
        for pair in entries.windows(2) {
            assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
        }
    }

    #[test]
    fn test_find_duplicates_only_shared_hashes() {
        let entries = vec![
            entry("b", "z/b.html", "aa"),
            entry("a", "a.html", "aa"),
            entry("c", "c.html", "bb"),
            entry("d", "d.html", "cc"),
            entry("e", "e.html", "cc"),
            entry("f", "f.html", "cc"),
        ];

        let groups = find_duplicates(&entries);
        assert_eq!(
            groups,
            vec![
                DuplicateGroup {
                    hash: "aa".to_string(),
                    files: vec!["a.html".to_string(), "z/b.html".to_string()],
                },
                DuplicateGroup {
                    hash: "cc".to_string(),
                    files: vec![
                        "d.html".to_string(),
                        "e.html".to_string(),
                        "f.html".to_string()
                    ],
                },
            ]
        );
    }

    #[test]
    fn test_build_catalog_with_duplicates() {
        let temp = tempdir().unwrap();
        write(temp.path(), "reading_b.html", "<p>same</p>");
        write(temp.path(), "reading_a.html", "<p>same</p>");
        write(temp.path(), "writing_c.html", "<p>unique</p>");
        write(temp.path(), "node_modules/reading_d.html", "<p>same</p>");

        let catalog = build_catalog(temp.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.duplicates.len(), 1);
        assert_eq!(
            catalog.duplicates[0].files,
            vec!["reading_a.html", "reading_b.html"]
        );
        assert_eq!(
            catalog.duplicates[0].hash,
            crate::core::util::hash_bytes(b"<p>same</p>")
        );

        let files: Vec<_> = catalog.entries.iter().map(|e| e.file.as_str()).collect();
        assert_eq!(files, vec!["reading_a.html", "reading_b.html", "writing_c.html"]);
    }
}
