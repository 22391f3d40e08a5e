//! Document input boundary.
//!
//! A [`Document`] is the unit of input to the pipeline: a source address
//! plus the ordered paragraph texts already extracted from its markup.
//! Acquisition and markup parsing happen outside this crate, behind the
//! [`DocumentSource`] trait.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A fetched document, immutable once constructed.
///
/// Construction is eager: whichever collaborator produced the paragraphs
/// has already finished all network and parsing work, so reading a field
/// never triggers a fetch as a side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    url: String,
    paragraphs: Vec<String>,
}

impl Document {
    /// Create a document from its address and paragraph texts.
    pub fn new(url: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            url: url.into(),
            paragraphs,
        }
    }

    /// The source address this document was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The paragraph texts, in reading order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}

/// Acquisition boundary.
///
/// Implementations resolve an address into a [`Document`] — network
/// fetch, markup parsing, whatever the collaborator does. Failures
/// surface as [`AnalyticsError::Acquisition`](crate::AnalyticsError) and
/// are never caught by the analytics core: a failed source aborts its own
/// document and nothing else.
pub trait DocumentSource {
    /// Produce the document, eagerly and exactly once per call.
    fn fetch(&self) -> Result<Document>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accessors() {
        let doc = Document::new("https://example.com", vec!["First.".to_string()]);

        assert_eq!(doc.url(), "https://example.com");
        assert_eq!(doc.paragraphs(), ["First.".to_string()]);
    }

    #[test]
    fn test_document_allows_empty_paragraphs() {
        let doc = Document::new("https://example.com", Vec::new());

        assert!(doc.paragraphs().is_empty());
    }
}
