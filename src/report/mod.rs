//! Report assembly and rendering
//!
//! [`AnalyticsReport`] is the immutable output record for one document:
//! a fixed-schema struct (so a missing or renamed field fails at build
//! time, not at lookup time), a text rendering, and a flat JSON record
//! for persistence.

pub mod summary;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::analytics::frequency::FrequencySummary;
use crate::analytics::stats::LengthStats;
use crate::error::Result;

/// Ordered word→value pairs (counts or lengths), kept in rank order.
///
/// Serializes as a JSON object whose keys appear in rank order, and
/// displays as `{word: value, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRanking(Vec<(String, usize)>);

impl WordRanking {
    pub fn from_pairs(pairs: Vec<(String, usize)>) -> Self {
        Self(pairs)
    }

    /// Iterate entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(word, value)| (word.as_str(), *value))
    }

    /// The highest-ranked entry.
    pub fn first(&self) -> Option<(&str, usize)> {
        self.0.first().map(|(word, value)| (word.as_str(), *value))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|(w, _)| w == word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for WordRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, value) in &self.0 {
            map.serialize_entry(word, value)?;
        }
        map.end()
    }
}

impl fmt::Display for WordRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (word, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// The immutable analytics record for one document.
///
/// Field names double as the keys of the persisted JSON record. Note
/// that `top_10_words` is selected from the 20 highest-count words
/// rather than the full vocabulary — a scope limitation carried over
/// from the original analytics, kept so that both word rankings are
/// subsets of the same high-frequency pool.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    /// Ten most frequent words, counts included.
    pub top_10_words: WordRanking,
    /// Ten most frequent non-stopwords, counts included.
    pub top_10_words_filtered: WordRanking,
    pub average_word_length: f64,
    pub median_word_length: f64,
    /// Longest distinct words mapped to their character lengths.
    pub top_10_longest_words: WordRanking,
    /// Mean sentence length, in words.
    pub average_sentence_length: f64,
    pub median_sentence_length: f64,
    /// The sentence with the most words (first one on ties).
    pub longest_sentence: String,
    /// Source address of the document.
    pub url: String,
}

impl AnalyticsReport {
    /// Assemble a report from the analyzer outputs.
    pub fn from_parts(
        url: &str,
        frequency: FrequencySummary,
        word_lengths: LengthStats,
        longest_words: Vec<(String, usize)>,
        sentence_lengths: LengthStats,
        longest_sentence: String,
    ) -> Self {
        Self {
            top_10_words: WordRanking::from_pairs(frequency.top_words),
            top_10_words_filtered: WordRanking::from_pairs(frequency.top_words_filtered),
            average_word_length: word_lengths.mean,
            median_word_length: word_lengths.median,
            top_10_longest_words: WordRanking::from_pairs(longest_words),
            average_sentence_length: sentence_lengths.mean,
            median_sentence_length: sentence_lengths.median,
            longest_sentence,
            url: url.to_string(),
        }
    }

    /// Serialize to the flat JSON record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON record to `path`.
    pub fn save_to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl fmt::Display for AnalyticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page Analytics for {}", self.url)?;
        writeln!(f, "Top 10 Words: {}", self.top_10_words)?;
        writeln!(
            f,
            "Top 10 Words (No Stopwords): {}",
            self.top_10_words_filtered
        )?;
        writeln!(f, "Average Word Length: {:.2}", self.average_word_length)?;
        writeln!(f, "Median Word Length: {:.2}", self.median_word_length)?;
        writeln!(f, "Top 10 Longest Words: {}", self.top_10_longest_words)?;
        writeln!(
            f,
            "Average Sentence Length: {:.2}",
            self.average_sentence_length
        )?;
        writeln!(
            f,
            "Median Sentence Length: {:.2}",
            self.median_sentence_length
        )?;
        // The longest sentence is text and gets no numeric formatting.
        writeln!(f, "The Longest Sentence: {}", self.longest_sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, usize)]) -> Vec<(String, usize)> {
        items.iter().map(|(w, n)| (w.to_string(), *n)).collect()
    }

    fn make_report() -> AnalyticsReport {
        AnalyticsReport::from_parts(
            "https://example.com/article",
            FrequencySummary {
                top_words: pairs(&[("the", 4), ("cat", 2)]),
                top_words_filtered: pairs(&[("cat", 2)]),
            },
            LengthStats {
                mean: 3.25,
                median: 3.0,
            },
            pairs(&[("gigantic", 8), ("cat", 3)]),
            LengthStats {
                mean: 8.0 / 3.0,
                median: 3.0,
            },
            "The cat sat on the mat".to_string(),
        )
    }

    #[test]
    fn test_word_ranking_serializes_in_rank_order() {
        let ranking = WordRanking::from_pairs(pairs(&[("zebra", 3), ("apple", 1)]));

        let json = serde_json::to_string(&ranking).unwrap();
        assert_eq!(json, r#"{"zebra":3,"apple":1}"#);
    }

    #[test]
    fn test_word_ranking_display() {
        let ranking = WordRanking::from_pairs(pairs(&[("the", 4), ("cat", 2)]));

        assert_eq!(ranking.to_string(), "{the: 4, cat: 2}");
        assert_eq!(WordRanking::default().to_string(), "{}");
    }

    #[test]
    fn test_display_uses_two_decimals_for_numbers_only() {
        let rendered = make_report().to_string();

        assert!(rendered.contains("Average Word Length: 3.25"));
        assert!(rendered.contains("Median Word Length: 3.00"));
        assert!(rendered.contains("Average Sentence Length: 2.67"));
        // The sentence line is rendered as plain text.
        assert!(rendered.contains("The Longest Sentence: The cat sat on the mat"));
    }

    #[test]
    fn test_json_record_carries_every_field() {
        let report = make_report();

        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        for key in [
            "top_10_words",
            "top_10_words_filtered",
            "average_word_length",
            "median_word_length",
            "top_10_longest_words",
            "average_sentence_length",
            "median_sentence_length",
            "longest_sentence",
            "url",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["url"], "https://example.com/article");
        assert_eq!(value["top_10_words"]["the"], 4);
    }

    #[test]
    fn test_save_to_json_round_trips() {
        let report = make_report();
        let path = std::env::temp_dir().join("page_analytics_report_test.json");

        report.save_to_json(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["longest_sentence"], "The cat sat on the mat");
    }
}
