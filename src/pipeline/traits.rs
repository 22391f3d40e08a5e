//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations
//! are statically dispatched; the nlp types are the defaults.

use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tokenizer::WhitespaceTokenizer;
use crate::pipeline::artifacts::{SentenceSet, WordStream};

/// Sentence segmentation stage.
///
/// # Contract
///
/// - **Input**: ordered paragraph texts (may be empty).
/// - **Output**: trimmed non-empty sentences, in paragraph order and then
///   intra-paragraph order. A sentence never spans two paragraphs.
/// - **Pure**: deterministic over its input, no external state.
pub trait Segmenter {
    fn segment(&self, paragraphs: &[String]) -> SentenceSet;
}

impl Segmenter for SentenceSegmenter {
    fn segment(&self, paragraphs: &[String]) -> SentenceSet {
        SentenceSegmenter::segment(self, paragraphs)
    }
}

/// Word tokenization stage.
///
/// # Contract
///
/// - **Input**: a [`SentenceSet`].
/// - **Output**: the whitespace flattening of its sentences, tokens kept
///   verbatim (casing and inner punctuation preserved).
/// - **Pure**: the output word count equals the sum of each sentence's
///   whitespace-split count.
pub trait Tokenizer {
    fn tokenize(&self, sentences: &SentenceSet) -> WordStream;
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, sentences: &SentenceSet) -> WordStream {
        WhitespaceTokenizer::tokenize(self, sentences)
    }
}
