//! Byte-level UTF-8 decoder
//!
//! Decodes a raw buffer into parallel arrays: one of codepoint values,
//! one of the source byte spans those values came from. Keeping the
//! spans separate lets later stages fold the codepoints in place for
//! comparison while the original bytes stay reachable for output.

use crate::error::{CoreError, Result};

/// Source byte span of a single decoded letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSpan {
    /// Offset of the leading byte in the input buffer
    pub offset: usize,
    /// Number of bytes the letter occupied (1..=4 for well-formed input)
    pub len: u8,
}

impl LetterSpan {
    /// Resolve this span against the buffer it was decoded from
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.offset..self.offset + self.len as usize]
    }
}

/// Decoded letters with their source spans
///
/// `letters` and `spans` are index-parallel. `spans` is never mutated
/// after decoding; `letters` may be case-folded in place.
#[derive(Debug, Clone, Default)]
pub struct DecodedText {
    /// Codepoint values in document order
    pub letters: Vec<u32>,
    /// Source byte span of each letter
    pub spans: Vec<LetterSpan>,
}

impl DecodedText {
    /// Number of decoded letters
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the input decoded to zero letters
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// What a leading byte says about the sequence it starts
struct LeadingByte {
    /// Total bytes in the sequence, including the leading byte
    total_len: usize,
    /// Codepoint bits carried by the leading byte
    initial: u32,
}

/// Interpret the first byte of a UTF-8 sequence.
///
/// A byte with the high bit clear is a complete one-byte letter.
/// Otherwise the highest-order zero bit among positions 5..=2 encodes
/// the sequence length. A byte of the form `10xxxxxx` (a stray
/// continuation byte) or `111111xx` cannot start a sequence and is
/// rejected outright.
fn interpret_leading_byte(byte: u8, offset: usize) -> Result<LeadingByte> {
    if byte & 0x80 == 0 {
        return Ok(LeadingByte {
            total_len: 1,
            initial: u32::from(byte),
        });
    }

    // A stray continuation byte would otherwise pass the bit scan below
    // as a bogus two-byte leader.
    if byte & 0x40 == 0 {
        return Err(CoreError::InvalidLeadingByte { offset, byte });
    }

    let mut bit = 5;
    while bit > 1 {
        if byte & (1 << bit) == 0 {
            return Ok(LeadingByte {
                total_len: 7 - bit,
                initial: u32::from(byte) & (0xFF >> (8 - bit as u32)),
            });
        }
        bit -= 1;
    }

    // 111111xx: no zero bit in positions 5..=2
    Err(CoreError::InvalidLeadingByte { offset, byte })
}

/// Fold one continuation byte into the accumulated codepoint
fn accumulate_continuation(letter: u32, byte: u8, offset: usize) -> Result<u32> {
    if byte & 0x80 == 0 || byte & 0x40 != 0 {
        return Err(CoreError::InvalidContinuationByte { offset, byte });
    }
    Ok((letter << 6) | u32::from(byte & 0x3F))
}

/// Decode an entire buffer into letters and spans.
///
/// Consumes the whole buffer or fails; no partial result is returned.
pub fn decode(buffer: &[u8]) -> Result<DecodedText> {
    let mut decoded = DecodedText {
        letters: Vec::new(),
        spans: Vec::new(),
    };

    let mut offset = 0;
    while offset < buffer.len() {
        let lead = interpret_leading_byte(buffer[offset], offset)?;

        let mut letter = lead.initial;
        for i in 1..lead.total_len {
            let byte = *buffer
                .get(offset + i)
                .ok_or(CoreError::UnexpectedEof { offset })?;
            letter = accumulate_continuation(letter, byte, offset + i)?;
        }

        decoded.letters.push(letter);
        decoded.spans.push(LetterSpan {
            offset,
            len: lead.total_len as u8,
        });

        offset += lead.total_len;
    }

    log::trace!(
        "decoded {} letters from {} bytes",
        decoded.letters.len(),
        buffer.len()
    );

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii() {
        let decoded = decode(b"abc").unwrap();
        assert_eq!(decoded.letters, vec![97, 98, 99]);
        assert_eq!(decoded.spans[1], LetterSpan { offset: 1, len: 1 });
    }

    #[test]
    fn decodes_two_byte_sequences() {
        // "д" is 0xD0 0xB4, codepoint 1076
        let decoded = decode("д".as_bytes()).unwrap();
        assert_eq!(decoded.letters, vec![1076]);
        assert_eq!(decoded.spans, vec![LetterSpan { offset: 0, len: 2 }]);
    }

    #[test]
    fn decodes_three_and_four_byte_sequences() {
        let text = "€𝄞"; // U+20AC (3 bytes), U+1D11E (4 bytes)
        let decoded = decode(text.as_bytes()).unwrap();
        assert_eq!(decoded.letters, vec![0x20AC, 0x1D11E]);
        assert_eq!(decoded.spans[0].len, 3);
        assert_eq!(decoded.spans[1], LetterSpan { offset: 3, len: 4 });
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn rejects_stray_continuation_byte_as_leader() {
        let err = decode(&[0x80]).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidLeadingByte {
                offset: 0,
                byte: 0x80
            }
        );
    }

    #[test]
    fn rejects_fe_and_ff_leading_bytes() {
        assert!(matches!(
            decode(&[0xFF, 0x80]),
            Err(CoreError::InvalidLeadingByte { offset: 0, .. })
        ));
        assert!(matches!(
            decode(&[b'a', 0xFE]),
            Err(CoreError::InvalidLeadingByte { offset: 1, .. })
        ));
    }

    #[test]
    fn rejects_truncated_sequence() {
        // 0xD0 promises one continuation byte that never arrives
        let err = decode(&[0xD0]).unwrap_err();
        assert_eq!(err, CoreError::UnexpectedEof { offset: 0 });
    }

    #[test]
    fn rejects_bad_continuation_byte() {
        // 0xD0 followed by an ASCII byte instead of 10xxxxxx
        let err = decode(&[0xD0, b'x']).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidContinuationByte {
                offset: 1,
                byte: b'x'
            }
        );
    }

    #[test]
    fn spans_cover_the_buffer_exactly() {
        let text = "Кот cat 猫!";
        let bytes = text.as_bytes();
        let decoded = decode(bytes).unwrap();

        let mut rebuilt = Vec::new();
        for span in &decoded.spans {
            rebuilt.extend_from_slice(span.slice(bytes));
        }
        assert_eq!(rebuilt, bytes);
    }
}
