//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Pipeline`] composes the segmentation, tokenization, frequency, and
//! statistics stages and runs them strictly forward: paragraphs →
//! sentences → words → (frequency table, length stats) → report. Every
//! stage is a pure function over in-memory sequences, so a pipeline can
//! be shared across threads and documents with zero coordination.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over the segmenter and tokenizer stages; each
//! combination monomorphizes to a concrete type, and the zero-sized
//! default tokenizer adds no runtime cost.

use rayon::prelude::*;

use crate::analytics::frequency::FrequencyAnalyzer;
use crate::analytics::stats;
use crate::error::Result;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WhitespaceTokenizer;
use crate::pipeline::artifacts::PageText;
use crate::pipeline::traits::{Segmenter, Tokenizer};
use crate::report::AnalyticsReport;
use crate::types::{Document, DocumentSource};

/// Entries kept in the longest-words ranking.
const TOP_LONGEST: usize = 10;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled this is a no-op and the compiler removes it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The document analytics pipeline.
///
/// Holds the stage implementations and the frequency configuration; the
/// defaults are terminator segmentation, whitespace tokenization, and the
/// built-in stopword list.
#[derive(Debug, Clone)]
pub struct Pipeline<Seg = SentenceSegmenter, Tok = WhitespaceTokenizer> {
    segmenter: Seg,
    tokenizer: Tok,
    frequency: FrequencyAnalyzer,
}

impl Pipeline {
    /// Build the default pipeline.
    pub fn new() -> Self {
        Pipeline {
            segmenter: SentenceSegmenter::new(),
            tokenizer: WhitespaceTokenizer::new(),
            frequency: FrequencyAnalyzer::new(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<Seg, Tok> Pipeline<Seg, Tok>
where
    Seg: Segmenter,
    Tok: Tokenizer,
{
    /// Override the segmenter stage.
    pub fn segmenter<S: Segmenter>(self, segmenter: S) -> Pipeline<S, Tok> {
        Pipeline {
            segmenter,
            tokenizer: self.tokenizer,
            frequency: self.frequency,
        }
    }

    /// Override the tokenizer stage.
    pub fn tokenizer<T: Tokenizer>(self, tokenizer: T) -> Pipeline<Seg, T> {
        Pipeline {
            segmenter: self.segmenter,
            tokenizer,
            frequency: self.frequency,
        }
    }

    /// Replace the stopword configuration of the frequency stage.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.frequency = self.frequency.with_stopwords(stopwords);
        self
    }

    /// Extract the sentence and word artifacts for a document.
    pub fn extract(&self, document: &Document) -> PageText {
        trace_stage!("segment");
        let sentences = self.segmenter.segment(document.paragraphs());

        trace_stage!("tokenize");
        let words = self.tokenizer.tokenize(&sentences);

        PageText::new(document.url(), sentences, words)
    }

    /// Compute the analytics report over already-extracted text.
    ///
    /// Fails with [`EmptyContent`](crate::AnalyticsError::EmptyContent)
    /// when the text holds no sentences or no words.
    pub fn analyze(&self, text: &PageText) -> Result<AnalyticsReport> {
        trace_stage!("frequency");
        let frequency = self.frequency.analyze(text.words());

        trace_stage!("stats");
        let word_lengths = stats::word_length_stats(text.words())?;
        let longest_words = stats::top_longest_words(text.words(), TOP_LONGEST)?;
        let sentence_lengths = stats::sentence_length_stats(text.sentences())?;
        let longest_sentence = stats::longest_sentence(text.sentences())?;

        trace_stage!("report");
        Ok(AnalyticsReport::from_parts(
            text.url(),
            frequency,
            word_lengths,
            longest_words,
            sentence_lengths,
            longest_sentence,
        ))
    }

    /// Run the full pipeline for one document.
    pub fn run(&self, document: &Document) -> Result<AnalyticsReport> {
        self.analyze(&self.extract(document))
    }

    /// Run the pipeline over a batch of documents in parallel.
    ///
    /// Documents are independent, so each report computes on its own
    /// rayon task; a failing document lands in its own slot and never
    /// blocks the others.
    pub fn run_batch(&self, documents: &[Document]) -> Vec<Result<AnalyticsReport>>
    where
        Seg: Sync,
        Tok: Sync,
    {
        documents
            .par_iter()
            .map(|document| self.run(document))
            .collect()
    }

    /// Fetch and analyze a batch of sources.
    ///
    /// Acquisition failures propagate unchanged into the failing source's
    /// slot; the remaining sources still run.
    pub fn run_sources<S: DocumentSource>(&self, sources: &[S]) -> Vec<Result<AnalyticsReport>> {
        sources
            .iter()
            .map(|source| source.fetch().and_then(|document| self.run(&document)))
            .collect()
    }
}
