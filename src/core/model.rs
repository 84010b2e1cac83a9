//! Catalog data model
//!
//! These types are serialized verbatim into `data/tests.json` and
//! `data/duplicates.json`, so field order is part of the output contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Subject category of a practice test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Listening,
    Reading,
    Writing,
    Other,
}

impl Category {
    /// Scored categories in tie-break priority order
    pub const SCORED: [Category; 3] = [Category::Listening, Category::Reading, Category::Writing];

    /// Every category, `Other` last
    pub const ALL: [Category; 4] = [
        Category::Listening,
        Category::Reading,
        Category::Writing,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Listening => "listening",
            Category::Reading => "reading",
            Category::Writing => "writing",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered test file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEntry {
    /// File name without the `.html` extension
    pub title: String,

    /// Path relative to the catalog root, using '/' as separator
    pub file: String,

    pub category: Category,

    /// SHA-1 of the full file content, lowercase hex
    pub hash: String,

    /// File size in bytes
    pub size: u64,

    /// Modification time in seconds since epoch
    pub modified: f64,
}

/// Files sharing the same content digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub hash: String,

    /// Relative paths, sorted lexicographically
    pub files: Vec<String>,
}

/// Result of a full catalog pass
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<TestEntry>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries per category (every category present, zero if unused)
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        counts
    }
}
