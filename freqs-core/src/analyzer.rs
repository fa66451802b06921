//! Pipeline orchestration: decode, fold, segment, count, rank

use crate::{
    alphabet::AlphabetTable,
    counter::WordCounter,
    decoder::{self, DecodedText},
    error::Result,
    segmenter,
};

/// One ranked word in the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// Occurrence count of the case-folded word
    pub entries: u64,
    /// Original bytes of the first-encountered occurrence, preserving
    /// its letter case and exact encoding
    pub bytes: Vec<u8>,
}

impl RankedWord {
    /// The word bytes as UTF-8 text
    ///
    /// Always succeeds for reports produced by [`FrequencyAnalyzer`],
    /// since the bytes were decoded from the input verbatim.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Result of analyzing one input buffer
#[derive(Debug, Clone, Default)]
pub struct FrequencyReport {
    /// Distinct words, most frequent first, lexicographic ties ascending
    pub words: Vec<RankedWord>,
}

impl FrequencyReport {
    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the input contained no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Word frequency analyzer over raw UTF-8 buffers
///
/// The whole pipeline runs in one call: the buffer is decoded into
/// letters with their source spans, letters are case-folded in place,
/// words are segmented and counted, and the ranked result carries each
/// word's original first-occurrence bytes.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    alphabets: AlphabetTable,
}

impl FrequencyAnalyzer {
    /// Analyzer with the default Latin + Cyrillic table
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a caller-supplied alphabet table
    pub fn with_alphabets(alphabets: AlphabetTable) -> Self {
        FrequencyAnalyzer { alphabets }
    }

    /// The alphabet table in use
    pub fn alphabets(&self) -> &AlphabetTable {
        &self.alphabets
    }

    /// Analyze a buffer and return the ranked word frequencies
    pub fn analyze(&self, buffer: &[u8]) -> Result<FrequencyReport> {
        let mut decoded = decoder::decode(buffer)?;
        self.alphabets.fold_in_place(&mut decoded.letters);

        let mut counter = WordCounter::new();
        for span in segmenter::word_spans(&decoded.letters, &self.alphabets) {
            counter.register(&decoded.letters, span);
        }

        log::debug!(
            "analyzed {} bytes: {} letters, {} distinct words",
            buffer.len(),
            decoded.len(),
            counter.distinct()
        );

        let words = counter
            .into_ranked()
            .into_iter()
            .map(|word| RankedWord {
                entries: word.entries,
                bytes: original_bytes(&decoded, buffer, word.first.start, word.first.len),
            })
            .collect();

        Ok(FrequencyReport { words })
    }
}

/// Concatenate the source bytes of `len` letters starting at `start`
fn original_bytes(decoded: &DecodedText, buffer: &[u8], start: usize, len: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    for span in &decoded.spans[start..start + len] {
        bytes.extend_from_slice(span.slice(buffer));
    }
    bytes
}

/// Analyze a buffer with the default alphabet table
pub fn analyze_bytes(buffer: &[u8]) -> Result<FrequencyReport> {
    FrequencyAnalyzer::new().analyze(buffer)
}
