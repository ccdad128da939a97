use alloc::vec::Vec;

use crate::{DecodeError, DecoderOptions, Utf8Decoder};

pub(crate) fn test_options() -> DecoderOptions {
    DecoderOptions {
        panic_on_error: true,
        ..DecoderOptions::default()
    }
}

/// Feeds `bytes` in the given pieces, then finalizes.
pub(crate) fn decode_pieces<'a>(
    pieces: impl IntoIterator<Item = &'a [u8]>,
    options: DecoderOptions,
) -> Result<Vec<u16>, DecodeError> {
    let mut decoder = Utf8Decoder::with_options(Vec::<u16>::new(), options);
    for piece in pieces {
        decoder.feed(piece)?;
    }
    decoder.finalize()?;
    Ok(decoder.into_sink())
}

/// Feeds `bytes` in chunks of `chunk` bytes, then finalizes.
pub(crate) fn decode_chunked(
    bytes: &[u8],
    chunk: usize,
    options: DecoderOptions,
) -> Result<Vec<u16>, DecodeError> {
    decode_pieces(bytes.chunks(chunk), options)
}

/// Cuts `bytes` at offsets derived from `splits`, the way a transport
/// delivering arbitrary read sizes would.
pub(crate) fn split_at_offsets<'a>(bytes: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut pieces = Vec::new();
    let mut rest = bytes;
    for s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        pieces.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

/// Encodes `code_point` with the generalized UTF-8 bit layout, without
/// rejecting surrogates.
pub(crate) fn encode_3_byte(code_point: u32) -> [u8; 3] {
    assert!((0x800..=0xFFFF).contains(&code_point));
    #[expect(clippy::cast_possible_truncation)]
    let bytes = [
        0xE0 | (code_point >> 12) as u8,
        0x80 | ((code_point >> 6) & 0x3F) as u8,
        0x80 | (code_point & 0x3F) as u8,
    ];
    bytes
}
