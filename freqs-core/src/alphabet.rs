//! Alphabet descriptors, letter classification, and case folding
//!
//! Classification works over a small ordered table of per-script range
//! descriptors rather than Unicode character classes. The membership
//! test is a deliberate approximation carried over from the original
//! tool: it treats everything from a script's uppercase start up to
//! (but not including) its lowercase end as alphabetic, which pulls in
//! the punctuation gap between `Z` and `a` and drops the final
//! lowercase letter of each range. Tests pin this behavior down; do not
//! "fix" it without changing the output contract.

use crate::error::{CoreError, Result};

/// Case-folding ranges for one script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// First uppercase codepoint
    pub upper_begin: u32,
    /// First lowercase codepoint
    pub lower_begin: u32,
    /// One past the range used for membership; exclusive bound
    pub lower_end: u32,
}

impl Alphabet {
    /// Basic Latin: `A` / `a`..`z`
    pub const LATIN: Alphabet = Alphabet {
        upper_begin: 65,
        lower_begin: 97,
        lower_end: 122,
    };

    /// Cyrillic: `А` / `а`..`я`
    pub const CYRILLIC: Alphabet = Alphabet {
        upper_begin: 1040,
        lower_begin: 1072,
        lower_end: 1104,
    };
}

/// Ordered list of alphabet descriptors
///
/// The table is injected configuration: callers may supply their own
/// descriptors, the default covers Latin and Cyrillic. Descriptors must
/// be sorted by ascending `upper_begin`; the classifier's early exit
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    alphabets: Vec<Alphabet>,
}

impl Default for AlphabetTable {
    fn default() -> Self {
        AlphabetTable {
            alphabets: vec![Alphabet::LATIN, Alphabet::CYRILLIC],
        }
    }
}

impl AlphabetTable {
    /// Build a table from descriptors, validating the sort order
    pub fn new(alphabets: Vec<Alphabet>) -> Result<Self> {
        let sorted = alphabets
            .windows(2)
            .all(|pair| pair[0].upper_begin <= pair[1].upper_begin);
        if !sorted {
            return Err(CoreError::UnsortedAlphabets);
        }
        Ok(AlphabetTable { alphabets })
    }

    /// The descriptors in ascending order
    pub fn alphabets(&self) -> &[Alphabet] {
        &self.alphabets
    }

    /// Whether a (folded) codepoint counts as a word letter.
    ///
    /// Walks the descriptors in ascending order: a codepoint below the
    /// current descriptor's uppercase start belongs to no script and is
    /// rejected immediately; one below its `lower_end` is accepted.
    pub fn is_alpha(&self, letter: u32) -> bool {
        for alphabet in &self.alphabets {
            if letter < alphabet.upper_begin {
                return false;
            }
            if letter < alphabet.lower_end {
                return true;
            }
        }
        false
    }

    /// Fold a single uppercase codepoint to lowercase.
    ///
    /// Codepoints between a script's uppercase start and lowercase
    /// start are shifted by the distance between the two ranges; all
    /// others pass through unchanged.
    pub fn fold(&self, letter: u32) -> u32 {
        for alphabet in &self.alphabets {
            if letter >= alphabet.upper_begin && letter < alphabet.lower_begin {
                return letter + (alphabet.lower_begin - alphabet.upper_begin);
            }
        }
        letter
    }

    /// Fold every letter in place, so that words differing only in
    /// case compare equal during counting
    pub fn fold_in_place(&self, letters: &mut [u32]) {
        for letter in letters {
            *letter = self.fold(*letter);
        }
    }
}
