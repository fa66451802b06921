//! Case-insensitive word frequency analysis over raw UTF-8 buffers
//!
//! The crate implements a single sequential pipeline: a byte buffer is
//! decoded into codepoints with their source spans, codepoints are
//! case-folded against a small table of alphabet descriptors, maximal
//! alphabetic runs are segmented into words, and the distinct words are
//! counted and ranked by descending frequency with lexicographic
//! tie-breaks. Each ranked word carries the original bytes of its first
//! occurrence, so output preserves the casing and encoding the word was
//! first written with.
//!
//! ```
//! let report = freqs_core::analyze_bytes(b"Cat cat dog").unwrap();
//! assert_eq!(report.words[0].entries, 2);
//! assert_eq!(report.words[0].as_str(), Some("Cat"));
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod analyzer;
pub mod counter;
pub mod decoder;
pub mod error;
pub mod segmenter;

// Re-export key types
pub use alphabet::{Alphabet, AlphabetTable};
pub use analyzer::{analyze_bytes, FrequencyAnalyzer, FrequencyReport, RankedWord};
pub use counter::{CountedWord, WordCounter};
pub use decoder::{decode, DecodedText, LetterSpan};
pub use error::{CoreError, Result};
pub use segmenter::{word_spans, WordSpan};
