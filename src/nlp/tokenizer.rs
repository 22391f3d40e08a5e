//! Word tokenization
//!
//! Flattens sentences into a word stream by splitting on whitespace runs.
//! Casing and attached punctuation are preserved verbatim; only the
//! sentence terminators removed by segmentation are gone.

use crate::pipeline::artifacts::{SentenceSet, WordStream};

/// Whitespace word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize every sentence in order, appending its non-empty tokens.
    ///
    /// Deterministic function of its input; the output length equals the
    /// sum of each sentence's whitespace-split count.
    pub fn tokenize(&self, sentences: &SentenceSet) -> WordStream {
        let mut words = Vec::new();
        for sentence in sentences.iter() {
            words.extend(sentence.split_whitespace().map(str::to_string));
        }
        WordStream::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> SentenceSet {
        SentenceSet::new(texts.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_flattens_in_sentence_order() {
        let tokenizer = WhitespaceTokenizer::new();
        let stream = tokenizer.tokenize(&sentences(&["The cat sat", "Dogs bark"]));

        assert_eq!(
            stream.iter().collect::<Vec<_>>(),
            ["The", "cat", "sat", "Dogs", "bark"]
        );
    }

    #[test]
    fn test_word_count_equals_sum_of_splits() {
        let set = sentences(&["one  two   three", "four", "five six"]);
        let expected: usize = set.iter().map(|s| s.split_whitespace().count()).sum();

        let stream = WhitespaceTokenizer::new().tokenize(&set);

        assert_eq!(stream.len(), expected);
    }

    #[test]
    fn test_preserves_case_and_inner_punctuation() {
        let tokenizer = WhitespaceTokenizer::new();
        let stream = tokenizer.tokenize(&sentences(&["Dr Smith's cat-like, reflexes"]));

        assert_eq!(
            stream.iter().collect::<Vec<_>>(),
            ["Dr", "Smith's", "cat-like,", "reflexes"]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokenizer = WhitespaceTokenizer::new();
        let stream = tokenizer.tokenize(&sentences(&["a\t b \u{a0}c"]));

        assert_eq!(stream.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();

        assert!(tokenizer.tokenize(&sentences(&[])).is_empty());
    }
}
