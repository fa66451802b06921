//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors produced while decoding or analyzing an input buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Buffer ended while continuation bytes were still expected
    #[error("unexpected end of input inside a UTF-8 sequence starting at byte {offset}")]
    UnexpectedEof {
        /// Byte offset of the sequence's leading byte
        offset: usize,
    },

    /// Leading byte that cannot start a UTF-8 sequence
    #[error("invalid UTF-8 leading byte 0x{byte:02X} at byte {offset}")]
    InvalidLeadingByte {
        /// Offset of the offending byte
        offset: usize,
        /// The byte value itself
        byte: u8,
    },

    /// Byte inside a multi-byte sequence that does not match `10xxxxxx`
    #[error("invalid UTF-8 continuation byte 0x{byte:02X} at byte {offset}")]
    InvalidContinuationByte {
        /// Offset of the offending byte
        offset: usize,
        /// The byte value itself
        byte: u8,
    },

    /// Alphabet table whose descriptors are not sorted ascending
    #[error("alphabet descriptors must be sorted by ascending uppercase start")]
    UnsortedAlphabets,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
