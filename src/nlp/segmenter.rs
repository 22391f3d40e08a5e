//! Sentence segmentation
//!
//! Splits paragraph text into sentences on terminator characters. Every
//! terminator occurrence is a boundary; there is no abbreviation or
//! decimal handling.

use crate::pipeline::artifacts::SentenceSet;

/// Splits paragraphs into trimmed, non-empty sentences.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Characters that end a sentence
    terminators: Vec<char>,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?'],
        }
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the default terminator set (`.`, `!`, `?`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the terminator set.
    pub fn with_terminators(mut self, terminators: &[char]) -> Self {
        self.terminators = terminators.to_vec();
        self
    }

    /// Segment paragraphs into sentences.
    ///
    /// Paragraphs are processed independently: a sentence never spans two
    /// paragraphs, even when the first one lacks a terminator. Within a
    /// paragraph, every terminator occurrence is a boundary; pieces that
    /// are empty after trimming are dropped, so consecutive terminators
    /// produce no empty sentences. An empty paragraph list yields an
    /// empty set.
    pub fn segment(&self, paragraphs: &[String]) -> SentenceSet {
        let mut sentences = Vec::new();
        for paragraph in paragraphs {
            for piece in paragraph.split(|c: char| self.terminators.contains(&c)) {
                let piece = piece.trim();
                if !piece.is_empty() {
                    sentences.push(piece.to_string());
                }
            }
        }
        SentenceSet::new(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_splits_on_each_terminator() {
        let segmenter = SentenceSegmenter::new();
        let result = segmenter.segment(&paragraphs(&["A. B! C?"]));

        assert_eq!(result.iter().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn test_paragraph_without_terminator_is_one_sentence() {
        let segmenter = SentenceSegmenter::new();
        let result = segmenter.segment(&paragraphs(&["  no terminator here  "]));

        assert_eq!(result.iter().collect::<Vec<_>>(), ["no terminator here"]);
    }

    #[test]
    fn test_consecutive_terminators_produce_no_empties() {
        let segmenter = SentenceSegmenter::new();
        let result = segmenter.segment(&paragraphs(&["Wait... what?!"]));

        assert_eq!(result.iter().collect::<Vec<_>>(), ["Wait", "what"]);
    }

    #[test]
    fn test_sentences_never_span_paragraphs() {
        let segmenter = SentenceSegmenter::new();
        let result = segmenter.segment(&paragraphs(&["first half", "second half."]));

        assert_eq!(
            result.iter().collect::<Vec<_>>(),
            ["first half", "second half"]
        );
    }

    #[test]
    fn test_paragraph_order_is_preserved() {
        let segmenter = SentenceSegmenter::new();
        let result = segmenter.segment(&paragraphs(&["One. Two.", "Three."]));

        assert_eq!(result.iter().collect::<Vec<_>>(), ["One", "Two", "Three"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let segmenter = SentenceSegmenter::new();

        assert!(segmenter.segment(&[]).is_empty());
        assert!(segmenter.segment(&paragraphs(&["", "   ", " . ! "])).is_empty());
    }

    #[test]
    fn test_custom_terminators() {
        let segmenter = SentenceSegmenter::new().with_terminators(&[';']);
        let result = segmenter.segment(&paragraphs(&["a; b. c"]));

        assert_eq!(result.iter().collect::<Vec<_>>(), ["a", "b. c"]);
    }
}
