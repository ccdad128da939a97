//! An incremental UTF-8 decoder for byte streams that arrive in pieces.
//!
//! Feed bytes to a [`Utf8Decoder`] in chunks of any size, including chunks
//! that split a multi-byte sequence, and it emits each completed scalar
//! value to a [`Sink`] as UTF-16 code units as soon as its last byte is
//! seen. Malformed input is rejected at the first offending byte and the
//! decoder stays failed from then on.
//!
//! ```rust
//! use utf8modem::{DecodeErrorKind, Utf8Decoder};
//!
//! let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
//! decoder.feed(&[0x48, 0x69, 0xF0, 0x9F]).unwrap();
//! decoder.feed(&[0x91, 0x8B]).unwrap();
//! decoder.finalize().unwrap();
//! assert_eq!(String::from_utf16(decoder.sink()).unwrap(), "Hi👋");
//!
//! let mut decoder = Utf8Decoder::new(Vec::<u16>::new());
//! let err = decoder.feed(&[0x61, 0x80]).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::InvalidLeadByte(0x80));
//! assert_eq!(err.position(), 1);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk_utils;
mod classify;
mod decoder;
mod error;
mod options;
#[cfg(feature = "std")]
mod reader;
pub mod sink;

#[cfg(test)]
mod tests;

pub use chunk_utils::produce_chunks;
pub use classify::{ByteClass, classify};
pub use decoder::{DecoderState, Utf8Decoder, decode, decode_with_options};
pub use error::{DecodeError, DecodeErrorKind};
pub use options::DecoderOptions;
#[cfg(feature = "std")]
pub use reader::{DEFAULT_BUFFER_SIZE, ReadDecoder, ReadError, decode_reader};
pub use sink::Sink;
