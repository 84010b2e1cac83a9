//! Keyword tables used by the classifier
//!
//! Matching is substring-based over lowercased text. Strong keywords within a
//! category must not contain one another, otherwise a single word would score twice.

use crate::core::model::Category;

/// Points for each strong keyword found in a file name
pub const STRONG_WEIGHT: u32 = 2;

/// Points for each weak keyword found in a file name
pub const WEAK_WEIGHT: u32 = 1;

/// Number of leading characters inspected by the content fallback
pub const CONTENT_SNIFF_CHARS: usize = 5000;

const LISTENING_STRONG: &[&str] = &["listening", "listenning"];
const LISTENING_WEAK: &[&str] = &["audio", "recording", "dictation", "mp3"];

const READING_STRONG: &[&str] = &["reading", "readding"];
const READING_WEAK: &[&str] = &["passage", "headings", "tfng", "true_false"];

const WRITING_STRONG: &[&str] = &["writing", "task1", "task2", "task_1", "task_2"];
const WRITING_WEAK: &[&str] = &["essay", "letter", "graph", "chart"];

/// Category-identifying keywords (`Other` has none)
pub fn strong_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Listening => LISTENING_STRONG,
        Category::Reading => READING_STRONG,
        Category::Writing => WRITING_STRONG,
        Category::Other => &[],
    }
}

/// Loosely topical keywords (`Other` has none)
pub fn weak_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Listening => LISTENING_WEAK,
        Category::Reading => READING_WEAK,
        Category::Writing => WRITING_WEAK,
        Category::Other => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_keywords_do_not_nest() {
        for category in Category::SCORED {
            let words = strong_keywords(category);
            for a in words {
                for b in words {
                    if a != b {
                        assert!(!a.contains(b), "{} contains {} in {}", a, b, category);
                    }
                }
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in Category::ALL {
            for word in strong_keywords(category).iter().chain(weak_keywords(category)) {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }

    #[test]
    fn test_other_has_no_keywords() {
        assert!(strong_keywords(Category::Other).is_empty());
        assert!(weak_keywords(Category::Other).is_empty());
    }
}
