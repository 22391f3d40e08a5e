//! Document text analytics
//!
//! Turns the textual body of a fetched document into a compact
//! statistical report: sentence and word segmentation, word frequency
//! analysis, length distributions, and extremal items. Reports are built
//! for ad-hoc comparison across a small set of documents.
//!
//! Acquisition and markup parsing stay outside this crate: a collaborator
//! produces a [`Document`] (source address plus ordered paragraph texts),
//! and the pipeline flows strictly forward from there:
//!
//! ```text
//! paragraphs → sentences → words → (frequency table, length stats) → report
//! ```
//!
//! # Example
//!
//! ```
//! use page_analytics::{Document, Pipeline};
//!
//! let document = Document::new(
//!     "https://example.com/cats",
//!     vec![
//!         "The cat sat. The cat ran!".to_string(),
//!         "Dogs bark.".to_string(),
//!     ],
//! );
//!
//! let report = Pipeline::new().run(&document).expect("document has text");
//! assert_eq!(report.longest_sentence, "The cat sat");
//! println!("{report}");
//! ```
//!
//! # Known scope limitation
//!
//! The raw top-10 word ranking is selected from the 20 most frequent
//! words rather than the full vocabulary, so both word rankings are
//! subsets of the same high-frequency pool. Downstream comparisons rely
//! on that subset relationship; see
//! [`FrequencyAnalyzer`](analytics::frequency::FrequencyAnalyzer).

pub mod analytics;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod types;

pub use error::{AnalyticsError, Result};
pub use nlp::segmenter::SentenceSegmenter;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::WhitespaceTokenizer;
pub use pipeline::artifacts::{PageText, SentenceSet, WordStream};
pub use pipeline::runner::Pipeline;
pub use report::summary::{SummaryRow, SummaryTable};
pub use report::{AnalyticsReport, WordRanking};
pub use types::{Document, DocumentSource};
