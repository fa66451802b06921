//! Word segmentation over the decoded letter sequence

use crate::alphabet::AlphabetTable;

/// A word as a span of letter indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// Index of the first letter in the word
    pub start: usize,
    /// Number of letters; always at least 1
    pub len: usize,
}

/// Split a folded letter sequence into maximal alphabetic runs.
///
/// Every non-alphabetic letter acts as a separator. A word still open
/// at the end of the sequence is closed there.
pub fn word_spans(letters: &[u32], table: &AlphabetTable) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (index, &letter) in letters.iter().enumerate() {
        if table.is_alpha(letter) {
            open.get_or_insert(index);
        } else if let Some(start) = open.take() {
            spans.push(WordSpan {
                start,
                len: index - start,
            });
        }
    }

    if let Some(start) = open {
        spans.push(WordSpan {
            start,
            len: letters.len() - start,
        });
    }

    spans
}
