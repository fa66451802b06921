//! Frequency counting and ranking of segmented words

use crate::segmenter::WordSpan;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Folded codepoints of one distinct word; short words stay inline
type WordKey = SmallVec<[u32; 8]>;

/// Per-word aggregate state
#[derive(Debug, Clone, Copy)]
struct WordStats {
    /// Letter span of the first occurrence, used later to recover the
    /// original bytes of the word as it was first written
    first: WordSpan,
    /// Occurrence count; at least 1
    entries: u64,
}

/// A distinct word with its final count and first-occurrence span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedWord {
    /// Occurrence count
    pub entries: u64,
    /// Letter span of the first occurrence
    pub first: WordSpan,
    /// Folded codepoints, the comparison key
    pub key: Vec<u32>,
}

/// Content-keyed word aggregator.
///
/// Keys are the folded codepoint sequences, so equality is exact and
/// case-insensitive by construction. The first occurrence's span is
/// kept so output can reproduce the original casing and encoding.
#[derive(Debug, Default)]
pub struct WordCounter {
    words: HashMap<WordKey, WordStats>,
}

impl WordCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one word occurrence given the folded letter sequence
    /// it was segmented from
    pub fn register(&mut self, letters: &[u32], span: WordSpan) {
        let key: WordKey = letters[span.start..span.start + span.len].into();
        self.words
            .entry(key)
            .and_modify(|stats| stats.entries += 1)
            .or_insert(WordStats {
                first: span,
                entries: 1,
            });
    }

    /// Number of distinct words registered so far
    pub fn distinct(&self) -> usize {
        self.words.len()
    }

    /// Consume the counter, returning words ranked by descending count
    /// with lexicographic ties broken over the folded codepoints
    pub fn into_ranked(self) -> Vec<CountedWord> {
        let mut ranked: Vec<CountedWord> = self
            .words
            .into_iter()
            .map(|(key, stats)| CountedWord {
                entries: stats.entries,
                first: stats.first,
                key: key.into_vec(),
            })
            .collect();

        ranked.sort_by(|a, b| b.entries.cmp(&a.entries).then_with(|| a.key.cmp(&b.key)));

        ranked
    }
}
