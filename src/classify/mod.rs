//! Category detection for test files
//!
//! Classification runs in two steps:
//! 1. Weighted keyword scoring over the lowercased file name
//! 2. When the file name carries no signal, a bounded scan of the file's
//!    leading text for strong keywords
//!
//! Anything left undecided is `Other`.

pub mod keywords;

use std::collections::BTreeMap;
use std::path::Path;

use crate::core::model::Category;
use crate::core::util::read_prefix;
use keywords::{
    strong_keywords, weak_keywords, CONTENT_SNIFF_CHARS, STRONG_WEIGHT, WEAK_WEIGHT,
};

/// Per-category score for a single file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScore {
    scores: BTreeMap<Category, u32>,
}

impl CategoryScore {
    /// Score a file name against the strong and weak keyword tables
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        let mut score = Self::default();

        for category in Category::SCORED {
            let strong = strong_keywords(category)
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count() as u32;
            let weak = weak_keywords(category)
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count() as u32;
            score.add(category, strong * STRONG_WEIGHT + weak * WEAK_WEIGHT);
        }

        score
    }

    pub fn add(&mut self, category: Category, points: u32) {
        *self.scores.entry(category).or_insert(0) += points;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    /// Highest-scoring category, ties resolved listening > reading > writing.
    ///
    /// Returns `None` when every score is zero.
    pub fn best(&self) -> Option<Category> {
        let mut best: Option<(Category, u32)> = None;
        for category in Category::SCORED {
            let points = self.get(category);
            match best {
                Some((_, top)) if points <= top => {}
                _ if points > 0 => best = Some((category, points)),
                _ => {}
            }
        }
        best.map(|(category, _)| category)
    }
}

/// First category whose strong keywords occur in `text`, in priority order
pub fn detect_in_text(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    Category::SCORED.into_iter().find(|category| {
        strong_keywords(*category)
            .iter()
            .any(|kw| lower.contains(kw))
    })
}

/// Classify from the file name alone
pub fn classify_filename(filename: &str) -> Option<Category> {
    CategoryScore::from_filename(filename).best()
}

/// Look at the leading text of a file. Read errors mean "no signal".
pub fn sniff_content(path: &Path) -> Option<Category> {
    match read_prefix(path, CONTENT_SNIFF_CHARS) {
        Ok(text) => detect_in_text(&text),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "content sniff failed");
            None
        }
    }
}

/// Detect the category of a test file from its name, then its content
pub fn detect_category(path: &Path) -> Category {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(category) = classify_filename(&filename) {
        return category;
    }

    sniff_content(path).unwrap_or(Category::Other)
}
