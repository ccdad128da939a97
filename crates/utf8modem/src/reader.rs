//! Reader-based decoding.
//!
//! _Requires Cargo feature `std`._

extern crate std;

use alloc::{vec, vec::Vec};
use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::{decoder::Utf8Decoder, error::DecodeError, sink::Sink};

/// Read buffer size used by [`ReadDecoder::new`].
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum ReadError {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes read are not valid UTF-8.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Pulls bytes from a reader through a fixed buffer into a [`Utf8Decoder`].
///
/// The buffer size only affects how the stream is chunked, never the
/// decoded output.
#[derive(Debug)]
pub struct ReadDecoder<R, S> {
    reader: R,
    decoder: Utf8Decoder<S>,
    buffer: Vec<u8>,
}

impl<R: Read, S: Sink> ReadDecoder<R, S> {
    /// Creates an adapter with a [`DEFAULT_BUFFER_SIZE`] buffer.
    pub fn new(reader: R, decoder: Utf8Decoder<S>) -> Self {
        Self::with_capacity(reader, decoder, DEFAULT_BUFFER_SIZE)
    }

    /// Creates an adapter reading at most `capacity` bytes at a time.
    ///
    /// A `capacity` of zero is treated as one.
    pub fn with_capacity(reader: R, decoder: Utf8Decoder<S>, capacity: usize) -> Self {
        Self {
            reader,
            decoder,
            buffer: vec![0; capacity.max(1)],
        }
    }

    /// Performs one read and feeds whatever arrived to the decoder.
    ///
    /// Returns the number of bytes read; `0` means the reader is exhausted.
    /// The decoder is not finalized.
    ///
    /// # Errors
    ///
    /// Returns reader errors other than [`ErrorKind::Interrupted`], which is
    /// retried, and decode errors.
    pub fn read_chunk(&mut self) -> Result<usize, ReadError> {
        let n = loop {
            match self.reader.read(&mut self.buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        };
        self.decoder.feed(&self.buffer[..n])?;
        Ok(n)
    }

    /// Reads until end of input, finalizes the decoder and returns its sink.
    ///
    /// # Errors
    ///
    /// See [`read_chunk`](Self::read_chunk); additionally fails with
    /// [`TruncatedInput`](crate::DecodeErrorKind::TruncatedInput) if the
    /// input ends inside a sequence.
    pub fn decode_to_end(mut self) -> Result<S, ReadError> {
        while self.read_chunk()? > 0 {}
        self.decoder.finalize()?;
        Ok(self.decoder.into_sink())
    }

    /// Borrows the decoder, e.g. to inspect its position.
    pub fn decoder(&self) -> &Utf8Decoder<S> {
        &self.decoder
    }

    /// Mutably borrows the decoder, e.g. to drain its sink between reads.
    pub fn decoder_mut(&mut self) -> &mut Utf8Decoder<S> {
        &mut self.decoder
    }

    /// Returns the reader and the decoder.
    pub fn into_parts(self) -> (R, Utf8Decoder<S>) {
        (self.reader, self.decoder)
    }
}

/// Decodes everything `reader` produces into `sink` with default options.
///
/// This method is also re-exported as `utf8modem::decode_reader`.
///
/// # Errors
///
/// Fails on reader errors and on malformed or truncated input.
pub fn decode_reader<R: Read, S: Sink>(reader: R, sink: S) -> Result<S, ReadError> {
    ReadDecoder::new(reader, Utf8Decoder::new(sink)).decode_to_end()
}
