use thiserror::Error;

/// A decoding failure, carrying the byte position at which it was detected.
///
/// Once a [`Utf8Decoder`](crate::Utf8Decoder) returns one of these, the
/// session is terminal: every later call fails with
/// [`DecodeErrorKind::DecoderAlreadyFailed`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {position}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) position: u64,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, position: u64) -> Self {
        Self { kind, position }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Zero-based offset of the offending byte in the stream.
    ///
    /// For [`DecodeErrorKind::TruncatedInput`] this is the stream length, i.e.
    /// the position of the first missing byte.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }
}

/// Why a byte stream was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A continuation byte appeared where a lead byte was expected, or the
    /// byte has more than six leading one bits.
    #[error("invalid lead byte 0x{0:02X}")]
    InvalidLeadByte(u8),
    /// A byte other than `10xxxxxx` appeared inside a multi-byte sequence.
    #[error("invalid continuation byte 0x{0:02X}")]
    InvalidContinuationByte(u8),
    /// The sequence encodes a value that fits in fewer bytes.
    #[error("overlong encoding of code point 0x{0:X}")]
    OverlongEncoding(u32),
    /// The sequence encodes a value above U+10FFFF.
    #[error("code point 0x{0:X} is out of range")]
    CodePointOutOfRange(u32),
    /// The sequence encodes a UTF-16 surrogate and surrogates are rejected.
    #[error("surrogate code point 0x{0:X}")]
    SurrogateCodePoint(u32),
    /// The stream ended in the middle of a multi-byte sequence.
    #[error("truncated input, expected {expected} more bytes")]
    TruncatedInput {
        /// Continuation bytes still outstanding.
        expected: u8,
    },
    /// The decoder already reported an error or was finalized.
    #[error("decoder already failed")]
    DecoderAlreadyFailed,
}
