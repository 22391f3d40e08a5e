//! Typed pipeline artifacts.
//!
//! Each type is an intermediate result flowing forward between stages:
//! paragraphs → [`SentenceSet`] → [`WordStream`] → report. Data flows
//! strictly forward; no stage reaches back into an earlier artifact.

/// Sentences extracted from a document, in reading order.
///
/// Invariant: every element is non-empty after trimming. Order is
/// paragraph order, then split order within each paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceSet {
    sentences: Vec<String>,
}

impl SentenceSet {
    /// Wrap an ordered sentence list.
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// Iterate the sentences in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// The word stream derived from a [`SentenceSet`].
///
/// Duplicates and casing are preserved verbatim; order is the whitespace
/// flattening of the sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStream {
    words: Vec<String>,
}

impl WordStream {
    /// Wrap an ordered word list.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Iterate the words in stream order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Number of word occurrences (duplicates included).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extracted content of one document: the address it came from plus the
/// sentence and word artifacts derived from its paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    url: String,
    sentences: SentenceSet,
    words: WordStream,
}

impl PageText {
    pub fn new(url: impl Into<String>, sentences: SentenceSet, words: WordStream) -> Self {
        Self {
            url: url.into(),
            sentences,
            words,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn sentences(&self) -> &SentenceSet {
        &self.sentences
    }

    pub fn words(&self) -> &WordStream {
        &self.words
    }
}
