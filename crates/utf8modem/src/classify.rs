//! Lead-bit classification of a single input byte.
//!
//! Every byte of a UTF-8 stream announces its role in its most significant
//! bits:
//!
//! ```text
//!   0xxxxxxx  ASCII, the whole byte is the scalar value
//!   10xxxxxx  continuation, 6 payload bits
//!   110xxxxx  lead of a 2-byte sequence
//!   1110xxxx  lead of a 3-byte sequence
//!   11110xxx  lead of a 4-byte sequence
//!   111110xx  lead of a 5-byte sequence
//!   1111110x  lead of a 6-byte sequence
//!   1111111x  never valid
//! ```
//!
//! Five and six byte forms are structurally recognised. The decoder rejects
//! them once the accumulated value exceeds U+10FFFF, or as overlong forms
//! when [`DecoderOptions::reject_overlong`](crate::DecoderOptions) is set;
//! a small value spelled with six bytes is otherwise accepted.

use crate::error::DecodeErrorKind;

/// The largest number of bytes a lead byte may announce.
pub(crate) const MAX_SEQUENCE_LEN: u8 = 6;

/// The prefix length and payload bits of one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteClass {
    prefix_len: u8,
    payload: u8,
}

impl ByteClass {
    /// Number of consecutive one bits at the top of the byte (0 to 6).
    ///
    /// `0` is ASCII, `1` is a continuation byte and `2..=6` is a lead byte
    /// announcing a sequence of that many bytes.
    #[must_use]
    pub fn prefix_len(self) -> u8 {
        self.prefix_len
    }

    /// The bits below the prefix and its terminating zero bit.
    #[must_use]
    pub fn payload(self) -> u8 {
        self.payload
    }

    /// Returns `true` for a `0xxxxxxx` byte.
    #[must_use]
    pub fn is_ascii(self) -> bool {
        self.prefix_len == 0
    }

    /// Returns `true` for a `10xxxxxx` byte.
    #[must_use]
    pub fn is_continuation(self) -> bool {
        self.prefix_len == 1
    }

    /// Total length of the sequence this byte starts, or `None` for a
    /// continuation byte.
    #[must_use]
    pub fn sequence_len(self) -> Option<u8> {
        match self.prefix_len {
            0 => Some(1),
            1 => None,
            n => Some(n),
        }
    }
}

/// Splits `byte` into its prefix length and payload bits.
///
/// # Errors
///
/// Returns [`DecodeErrorKind::InvalidLeadByte`] when the byte starts with
/// seven or more one bits (`0xFE` and `0xFF`), which no UTF-8 form uses.
///
/// # Examples
///
/// ```
/// use utf8modem::classify;
///
/// let class = classify(0b1110_1010).unwrap();
/// assert_eq!(class.prefix_len(), 3);
/// assert_eq!(class.payload(), 0b0000_1010);
/// ```
pub fn classify(byte: u8) -> Result<ByteClass, DecodeErrorKind> {
    #[expect(clippy::cast_possible_truncation)]
    let prefix_len = byte.leading_ones() as u8;
    if prefix_len > MAX_SEQUENCE_LEN {
        return Err(DecodeErrorKind::InvalidLeadByte(byte));
    }
    let payload = byte & (0xFF_u8 >> (prefix_len + 1));
    Ok(ByteClass {
        prefix_len,
        payload,
    })
}
