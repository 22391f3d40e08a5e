//! Stopword filtering
//!
//! Provides the fixed filter list used by the frequency analyzer, plus
//! custom lists and the `stop-words` crate's per-language lists. A filter
//! is a plain value passed into the analyzer — there is no ambient
//! process-wide list.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The built-in list: the conjunctions, prepositions, and articles
/// excluded from the filtered frequency ranking.
const DEFAULT_STOPWORDS: [&str; 10] = [
    "and", "or", "but", "in", "on", "at", "with", "for", "the", "a",
];

/// A filter for excluding stopwords from frequency rankings.
///
/// Membership is tested on the lowercase form of a word, so "The" and
/// "the" are both stopwords under the default list.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Create a filter from one of the `stop-words` crate's language
    /// lists. Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a word's lowercase form is in the filter.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
