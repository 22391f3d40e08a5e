//! Length statistics and extremal items
//!
//! Mean/median distributions over word and sentence lengths, the longest
//! words, and the longest sentence. Every operation here requires a
//! non-empty sequence and reports [`AnalyticsError::EmptyContent`]
//! instead of dividing by zero or taking the max of nothing.

use crate::error::{AnalyticsError, Result};
use crate::pipeline::artifacts::{SentenceSet, WordStream};

/// Mean and median of a length distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthStats {
    pub mean: f64,
    pub median: f64,
}

impl LengthStats {
    /// Compute over a sample of lengths.
    ///
    /// The median of an even-sized sample is the midpoint of the two
    /// central values.
    fn from_lengths(mut lengths: Vec<usize>, what: &'static str) -> Result<Self> {
        if lengths.is_empty() {
            return Err(AnalyticsError::EmptyContent(what));
        }
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        lengths.sort_unstable();
        let mid = lengths.len() / 2;
        let median = if lengths.len() % 2 == 0 {
            (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
        } else {
            lengths[mid] as f64
        };

        Ok(Self { mean, median })
    }
}

/// Character length of a word — Unicode scalars, not bytes.
fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Number of whitespace-separated words in a sentence.
fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Mean/median character length over every word occurrence, duplicates
/// included.
pub fn word_length_stats(words: &WordStream) -> Result<LengthStats> {
    LengthStats::from_lengths(words.iter().map(char_len).collect(), "words")
}

/// Mean/median word count over every sentence.
pub fn sentence_length_stats(sentences: &SentenceSet) -> Result<LengthStats> {
    LengthStats::from_lengths(sentences.iter().map(word_count).collect(), "sentences")
}

/// The `n` longest words with their character lengths.
///
/// Words are ranked by descending length (ties keep stream order), the
/// first `n` occurrences are taken, and the result is keyed by the word
/// string — a word repeated among those `n` collapses to a single entry,
/// so the mapping may hold fewer than `n` items. Intentional
/// simplification; this is not a multiset.
pub fn top_longest_words(words: &WordStream, n: usize) -> Result<Vec<(String, usize)>> {
    if words.is_empty() {
        return Err(AnalyticsError::EmptyContent("words"));
    }

    let mut ranked: Vec<&str> = words.iter().collect();
    ranked.sort_by_key(|word| std::cmp::Reverse(char_len(word)));

    let mut longest: Vec<(String, usize)> = Vec::with_capacity(n);
    for word in ranked.into_iter().take(n) {
        if !longest.iter().any(|(seen, _)| seen == word) {
            longest.push((word.to_string(), char_len(word)));
        }
    }
    Ok(longest)
}

/// The sentence with the most words; the first one wins ties.
pub fn longest_sentence(sentences: &SentenceSet) -> Result<String> {
    let mut best: Option<(&str, usize)> = None;
    for sentence in sentences.iter() {
        let count = word_count(sentence);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((sentence, count)),
        }
    }
    best.map(|(sentence, _)| sentence.to_string())
        .ok_or(AnalyticsError::EmptyContent("sentences"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(words: &[&str]) -> WordStream {
        WordStream::new(words.iter().map(|w| w.to_string()).collect())
    }

    fn sentences(texts: &[&str]) -> SentenceSet {
        SentenceSet::new(texts.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_word_length_mean_and_even_median() {
        let stats = word_length_stats(&stream(&["a", "aa", "aaa", "aaaa"])).unwrap();

        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_odd_median() {
        let stats = word_length_stats(&stream(&["a", "aaa", "aa"])).unwrap();

        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_duplicates_count_toward_word_lengths() {
        let stats = word_length_stats(&stream(&["aa", "aa", "aaaa"])).unwrap();

        assert!((stats.mean - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_word_length_counts_unicode_scalars() {
        let stats = word_length_stats(&stream(&["héllo"])).unwrap();

        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn test_sentence_length_stats() {
        let stats =
            sentence_length_stats(&sentences(&["The cat sat", "The cat ran", "Dogs bark"]))
                .unwrap();

        assert!((stats.mean - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_top_longest_words_values_match_lengths() {
        let longest = top_longest_words(&stream(&["tiny", "gigantic", "mid"]), 10).unwrap();

        assert_eq!(longest[0], ("gigantic".to_string(), 8));
        for (word, length) in &longest {
            assert_eq!(*length, word.chars().count());
        }
        assert_eq!(longest.len(), 3);
    }

    #[test]
    fn test_top_longest_words_collapse_duplicates() {
        let words: Vec<&str> = std::iter::repeat("repeated")
            .take(9)
            .chain(["short"])
            .collect();
        let longest = top_longest_words(&stream(&words), 10).unwrap();

        // Nine copies plus one shorter word collapse to two entries.
        assert_eq!(
            longest,
            [("repeated".to_string(), 8), ("short".to_string(), 5)]
        );
    }

    #[test]
    fn test_top_longest_words_tie_keeps_stream_order() {
        let longest = top_longest_words(&stream(&["bbbb", "aaaa", "cc"]), 2).unwrap();

        assert_eq!(
            longest,
            [("bbbb".to_string(), 4), ("aaaa".to_string(), 4)]
        );
    }

    #[test]
    fn test_longest_sentence_first_wins_ties() {
        let result =
            longest_sentence(&sentences(&["short one", "one two three", "uno dos tres"])).unwrap();

        assert_eq!(result, "one two three");
    }

    #[test]
    fn test_empty_inputs_are_errors() {
        assert!(matches!(
            word_length_stats(&stream(&[])),
            Err(AnalyticsError::EmptyContent("words"))
        ));
        assert!(matches!(
            top_longest_words(&stream(&[]), 10),
            Err(AnalyticsError::EmptyContent("words"))
        ));
        assert!(matches!(
            sentence_length_stats(&sentences(&[])),
            Err(AnalyticsError::EmptyContent("sentences"))
        ));
        assert!(matches!(
            longest_sentence(&sentences(&[])),
            Err(AnalyticsError::EmptyContent("sentences"))
        ));
    }
}
