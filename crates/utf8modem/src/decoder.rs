//! The incremental UTF-8 decoding state machine.
//!
//! [`Utf8Decoder`] accepts input in arbitrary chunks through
//! [`feed`](Utf8Decoder::feed) and hands every completed scalar value to its
//! [`Sink`] as one or two UTF-16 code units. Chunk boundaries may fall
//! anywhere, including inside a multi-byte sequence; the partially decoded
//! code point is carried over to the next call.
//!
//! Decoding is strict about failure: the first malformed byte moves the
//! decoder into a terminal state and every later call fails. There is no
//! resynchronisation.
//!
//! # Examples
//!
//! ```rust
//! use utf8modem::Utf8Decoder;
//!
//! let bytes = "a€😀".as_bytes();
//! let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
//! for chunk in bytes.chunks(3) {
//!     decoder.feed(chunk).unwrap();
//! }
//! decoder.finalize().unwrap();
//! assert_eq!(decoder.into_sink(), vec![0x61, 0x20AC, 0xD83D, 0xDE00]);
//! ```

use alloc::vec::Vec;

use crate::{
    classify::classify,
    error::{DecodeError, DecodeErrorKind},
    options::DecoderOptions,
    sink::Sink,
};

/// Largest Unicode scalar value.
const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Smallest value that needs a sequence of the indexed length.
const MIN_VALUE_FOR_LEN: [u32; 7] = [0, 0, 0x80, 0x800, 0x1_0000, 0x20_0000, 0x400_0000];

// ------------------------------------------------------------------------------------------------
// State
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating {
        code_point: u32,
        /// Continuation bytes still expected.
        remaining: u8,
        /// Continuation bytes the lead byte announced.
        required: u8,
    },
    Failed,
    Finished,
}

/// Observable state of a [`Utf8Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Between code points; a lead byte or ASCII byte is expected next.
    Idle,
    /// Inside a multi-byte sequence.
    Accumulating {
        /// Continuation bytes still expected.
        remaining: u8,
        /// Continuation bytes the lead byte announced.
        required: u8,
    },
    /// A decode error was reported. Terminal.
    Failed,
    /// [`Utf8Decoder::finalize`] was called. Terminal.
    Finished,
}

impl From<State> for DecoderState {
    fn from(state: State) -> Self {
        match state {
            State::Idle => DecoderState::Idle,
            State::Accumulating {
                remaining,
                required,
                ..
            } => DecoderState::Accumulating {
                remaining,
                required,
            },
            State::Failed => DecoderState::Failed,
            State::Finished => DecoderState::Finished,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Decoder
// ------------------------------------------------------------------------------------------------

/// Decodes one UTF-8 byte stream into UTF-16 code units.
///
/// Each stream needs its own decoder. Decoders hold no shared state, so
/// independent streams can be decoded on different threads without
/// synchronisation.
#[derive(Debug, Clone)]
pub struct Utf8Decoder<S> {
    sink: S,
    options: DecoderOptions,
    state: State,
    position: u64,
}

impl<S: Sink> Utf8Decoder<S> {
    /// Creates a decoder with default options that emits into `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, DecoderOptions::default())
    }

    /// Creates a decoder with the given validation options.
    pub fn with_options(sink: S, options: DecoderOptions) -> Self {
        Self {
            sink,
            options,
            state: State::Idle,
            position: 0,
        }
    }

    /// Consumes the next chunk of the stream.
    ///
    /// Every code point completed by `bytes` is emitted to the sink before
    /// this returns. A sequence left incomplete at the end of `bytes` is
    /// continued by the next call.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation found in `bytes`; code points
    /// completed before the offending byte have already been emitted, and
    /// bytes after it are not examined. Fails with
    /// [`DecodeErrorKind::DecoderAlreadyFailed`] without reading `bytes` if
    /// the decoder has failed or been finalized.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.ensure_open()?;
        for &byte in bytes {
            let position = self.position;
            self.position += 1;
            if let Err(kind) = self.step(byte) {
                return Err(self.fail(kind, position));
            }
        }
        Ok(())
    }

    /// Signals the end of the stream.
    ///
    /// The decoder is terminal afterwards whether or not this succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeErrorKind::TruncatedInput`] if the stream ended inside
    /// a multi-byte sequence, or the terminal-state errors described on
    /// [`feed`](Self::feed).
    pub fn finalize(&mut self) -> Result<(), DecodeError> {
        self.ensure_open()?;
        match self.state {
            State::Accumulating { remaining, .. } => Err(self.fail(
                DecodeErrorKind::TruncatedInput {
                    expected: remaining,
                },
                self.position,
            )),
            _ => {
                self.state = State::Finished;
                log::trace!("utf-8 stream finished after {} bytes", self.position);
                Ok(())
            }
        }
    }

    fn ensure_open(&self) -> Result<(), DecodeError> {
        if self.is_terminal() {
            return Err(DecodeError::new(
                DecodeErrorKind::DecoderAlreadyFailed,
                self.position,
            ));
        }
        Ok(())
    }

    #[inline]
    fn step(&mut self, byte: u8) -> Result<(), DecodeErrorKind> {
        let class = classify(byte)?;
        match self.state {
            State::Idle => match class.prefix_len() {
                0 => self.sink.accept(u16::from(byte)),
                1 => return Err(DecodeErrorKind::InvalidLeadByte(byte)),
                n => {
                    self.state = State::Accumulating {
                        code_point: u32::from(class.payload()),
                        remaining: n - 1,
                        required: n - 1,
                    };
                }
            },
            State::Accumulating {
                code_point,
                remaining,
                required,
            } => {
                if !class.is_continuation() {
                    return Err(DecodeErrorKind::InvalidContinuationByte(byte));
                }
                let code_point = (code_point << 6) | u32::from(class.payload());
                if remaining > 1 {
                    self.state = State::Accumulating {
                        code_point,
                        remaining: remaining - 1,
                        required,
                    };
                } else {
                    self.state = State::Idle;
                    self.emit(code_point, required + 1)?;
                }
            }
            State::Failed | State::Finished => unreachable!("terminal state checked by feed"),
        }
        Ok(())
    }

    /// Validates a completed `len`-byte sequence and emits it.
    fn emit(&mut self, code_point: u32, len: u8) -> Result<(), DecodeErrorKind> {
        let min = if self.options.reject_overlong || len == 2 {
            MIN_VALUE_FOR_LEN[usize::from(len)]
        } else {
            0
        };
        // U+00C0 and U+00C1 spelled with three bytes are rejected even when
        // other 3-byte overlong forms are let through.
        let overlong_c0_c1 = len == 3 && matches!(code_point, 0xC0 | 0xC1);
        if code_point < min || overlong_c0_c1 {
            return Err(DecodeErrorKind::OverlongEncoding(code_point));
        }
        if code_point > MAX_CODE_POINT {
            return Err(DecodeErrorKind::CodePointOutOfRange(code_point));
        }
        if self.options.reject_surrogates && (0xD800..=0xDFFF).contains(&code_point) {
            return Err(DecodeErrorKind::SurrogateCodePoint(code_point));
        }

        match u16::try_from(code_point) {
            Ok(unit) => self.sink.accept(unit),
            Err(_) => {
                let [high, low] = surrogate_pair(code_point);
                self.sink.accept(high);
                self.sink.accept(low);
            }
        }
        Ok(())
    }

    fn fail(&mut self, kind: DecodeErrorKind, position: u64) -> DecodeError {
        self.state = State::Failed;
        let err = DecodeError::new(kind, position);
        log::debug!("utf-8 decoding failed: {err}");
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!("{err}");
        }
        err
    }
}

impl<S> Utf8Decoder<S> {
    /// Number of bytes consumed so far, including a rejected byte.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The current state of the decoder.
    #[must_use]
    pub fn state(&self) -> DecoderState {
        self.state.into()
    }

    /// Returns `true` once the decoder has failed or been finalized.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, State::Failed | State::Finished)
    }

    /// The options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Borrows the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the sink, e.g. to drain output between chunks.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Drops the decoder and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Splits a supplementary-plane value into its UTF-16 surrogate pair.
fn surrogate_pair(code_point: u32) -> [u16; 2] {
    debug_assert!((0x1_0000..=MAX_CODE_POINT).contains(&code_point));
    let offset = code_point - 0x1_0000;
    #[expect(clippy::cast_possible_truncation)]
    let pair = [
        0xD800 | (offset >> 10) as u16,
        0xDC00 | (offset & 0x3FF) as u16,
    ];
    pair
}

/// Decodes a complete byte string with default options.
///
/// # Errors
///
/// Fails on the first malformed or truncated sequence.
pub fn decode(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    decode_with_options(bytes, DecoderOptions::default())
}

/// Decodes a complete byte string with the given options.
///
/// # Errors
///
/// Fails on the first malformed or truncated sequence.
pub fn decode_with_options(bytes: &[u8], options: DecoderOptions) -> Result<Vec<u16>, DecodeError> {
    let mut decoder = Utf8Decoder::with_options(Vec::with_capacity(bytes.len()), options);
    decoder.feed(bytes)?;
    decoder.finalize()?;
    Ok(decoder.into_sink())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn carries_sequence_across_feeds() {
        let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
        decoder.feed(&[0xE2]).unwrap();
        assert_eq!(
            decoder.state(),
            DecoderState::Accumulating {
                remaining: 2,
                required: 2
            }
        );
        decoder.feed(&[0x82]).unwrap();
        assert_eq!(
            decoder.state(),
            DecoderState::Accumulating {
                remaining: 1,
                required: 2
            }
        );
        assert!(decoder.sink().is_empty());
        decoder.feed(&[0xAC]).unwrap();
        assert_eq!(decoder.state(), DecoderState::Idle);
        assert_eq!(decoder.sink(), &vec![0x20AC]);
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn empty_feed_is_a_no_op() {
        let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
        assert_eq!(decoder.options(), &DecoderOptions::default());
        decoder.feed(&[]).unwrap();
        decoder.finalize().unwrap();
        assert!(decoder.into_sink().is_empty());
    }

    #[test]
    fn surrogate_pair_bounds() {
        assert_eq!(surrogate_pair(0x1_0000), [0xD800, 0xDC00]);
        assert_eq!(surrogate_pair(0x1F600), [0xD83D, 0xDE00]);
        assert_eq!(surrogate_pair(MAX_CODE_POINT), [0xDBFF, 0xDFFF]);
    }

    #[test]
    fn finalize_is_terminal() {
        let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
        decoder.feed(b"ok").unwrap();
        decoder.finalize().unwrap();
        assert!(decoder.is_terminal());
        assert_eq!(decoder.state(), DecoderState::Finished);

        let err = decoder.finalize().unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::DecoderAlreadyFailed);
        let err = decoder.feed(b"more").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::DecoderAlreadyFailed);
        // The state still tells a closed stream from a failed one.
        assert_eq!(decoder.state(), DecoderState::Finished);
        assert_eq!(decoder.position(), 2);
        assert_eq!(decoder.into_sink(), vec![u16::from(b'o'), u16::from(b'k')]);
    }

    #[test]
    #[should_panic(expected = "invalid lead byte 0xFF at byte 0")]
    fn panic_on_error_panics() {
        let mut decoder = Utf8Decoder::with_options(
            Vec::<u16>::new(),
            DecoderOptions {
                panic_on_error: true,
                ..Default::default()
            },
        );
        let _ = decoder.feed(&[0xFF]);
    }
}
