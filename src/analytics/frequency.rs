//! Word frequency analysis
//!
//! Builds an occurrence table with first-seen ordering and derives the
//! report's word rankings, raw and stopword-filtered.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::WordStream;

/// One counted word.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    word: String,
    count: usize,
}

/// Exact-case word→count table preserving first-seen insertion order.
///
/// Backed by a word→slot index plus a slot vector, so ranking ties can be
/// broken deterministically by first occurrence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    word_to_slot: FxHashMap<String, u32>,
    entries: Vec<Entry>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in the stream.
    ///
    /// Comparison is exact and case-sensitive: "The" and "the" are
    /// distinct entries.
    pub fn from_words(words: &WordStream) -> Self {
        let mut table = Self::new();
        for word in words.iter() {
            table.increment(word);
        }
        table
    }

    /// Add one occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        if let Some(&slot) = self.word_to_slot.get(word) {
            self.entries[slot as usize].count += 1;
            return;
        }
        let slot = self.entries.len() as u32;
        self.word_to_slot.insert(word.to_string(), slot);
        self.entries.push(Entry {
            word: word.to_string(),
            count: 1,
        });
    }

    /// Occurrences of `word`, zero when absent.
    pub fn count(&self, word: &str) -> usize {
        self.word_to_slot
            .get(word)
            .map(|&slot| self.entries[slot as usize].count)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-count words with their counts.
    ///
    /// The sort is stable over first-seen order, so words with equal
    /// counts rank in order of first occurrence.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked.into_iter().map(|e| (e.word, e.count)).collect()
    }
}

/// Word rankings produced by [`FrequencyAnalyzer::analyze`], in rank
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencySummary {
    /// The ten highest-count words, drawn from the high-frequency pool.
    pub top_words: Vec<(String, usize)>,
    /// The ten highest-count non-stopword entries of the same pool.
    /// May hold fewer than ten entries; never padded.
    pub top_words_filtered: Vec<(String, usize)>,
}

/// Derives the report's frequency rankings.
///
/// Both rankings are drawn from the pool of the 20 highest-count words:
/// the raw top 10 is selected from that pool rather than from the full
/// vocabulary (a scope limitation carried over from the original
/// analytics — downstream comparisons rely on both rankings being subsets
/// of the same pool), and the filtered top 10 is the pool with stopwords
/// removed.
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    stopwords: StopwordFilter,
    /// Size of the high-frequency pool both rankings draw from
    pool_size: usize,
    /// Entries kept in each ranking
    top_n: usize,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            pool_size: 20,
            top_n: 10,
        }
    }
}

impl FrequencyAnalyzer {
    /// Create an analyzer with the built-in stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword configuration.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Rank the words of a stream.
    ///
    /// An empty stream yields empty rankings; emptiness is an error only
    /// for the length statistics, not for frequency counting.
    pub fn analyze(&self, words: &WordStream) -> FrequencySummary {
        let table = FrequencyTable::from_words(words);
        let pool = table.most_common(self.pool_size);

        let top_words: Vec<_> = pool.iter().take(self.top_n).cloned().collect();
        let top_words_filtered: Vec<_> = pool
            .iter()
            .filter(|(word, _)| !self.stopwords.is_stopword(word))
            .take(self.top_n)
            .cloned()
            .collect();

        FrequencySummary {
            top_words,
            top_words_filtered,
        }
    }
}
