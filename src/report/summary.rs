//! Multi-document comparison
//!
//! Tabulates one row per analyzed document for side-by-side comparison:
//! address, longest sentence, longest word, sentence and word counts.

use std::fmt;

use serde::Serialize;

use crate::pipeline::artifacts::PageText;
use crate::report::AnalyticsReport;

/// Widest a longest-sentence cell may render before being clipped.
const SENTENCE_CELL_WIDTH: usize = 47;

/// One document's comparison row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub url: String,
    pub longest_sentence: String,
    pub longest_word: String,
    pub sentence_count: usize,
    pub word_count: usize,
}

impl SummaryRow {
    /// Build a row from a document's extracted text and its report.
    ///
    /// `longest_word` is the top entry of the longest-words ranking,
    /// which is ordered by descending length.
    pub fn new(text: &PageText, report: &AnalyticsReport) -> Self {
        let longest_word = report
            .top_10_longest_words
            .first()
            .map(|(word, _)| word.to_string())
            .unwrap_or_default();
        Self {
            url: text.url().to_string(),
            longest_sentence: report.longest_sentence.clone(),
            longest_word,
            sentence_count: text.sentences().len(),
            word_count: text.words().len(),
        }
    }
}

/// Aligned-column comparison table over summary rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: SummaryRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<SummaryRow> for SummaryTable {
    fn from_iter<I: IntoIterator<Item = SummaryRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Clip a cell to `max` characters, marking the cut with an ellipsis.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADERS: [&str; 5] = [
            "URL",
            "Longest Sentence",
            "Longest Word",
            "Sentences",
            "Words",
        ];

        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.url.clone(),
                    clip(&row.longest_sentence, SENTENCE_CELL_WIDTH),
                    row.longest_word.clone(),
                    row.sentence_count.to_string(),
                    row.word_count.to_string(),
                ]
            })
            .collect();

        let mut widths: [usize; 5] = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (i, header) in HEADERS.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{header:<width$}", width = widths[i])?;
        }
        writeln!(f)?;
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}", width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
