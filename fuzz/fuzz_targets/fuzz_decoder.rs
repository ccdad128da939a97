#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8modem::{DecoderOptions, Utf8Decoder};

#[derive(Debug, Arbitrary)]
struct Input {
    split_seed: u64,
    strict: bool,
    bytes: Vec<u8>,
}

fn decode(input: &Input) -> Result<Vec<u16>, utf8modem::DecodeError> {
    let options = if input.strict {
        DecoderOptions::strict()
    } else {
        DecoderOptions::default()
    };
    let mut decoder = Utf8Decoder::with_options(Vec::<u16>::new(), options);
    for chunk in split_into_chunks(&input.bytes, input.split_seed) {
        decoder.feed(chunk)?;
    }
    decoder.finalize()?;
    Ok(decoder.into_sink())
}

fuzz_target!(|input: Input| {
    let decoded = decode(&input);
    match core::str::from_utf8(&input.bytes) {
        Ok(s) => {
            let expected: Vec<u16> = s.encode_utf16().collect();
            assert_eq!(decoded.as_ref(), Ok(&expected));
        }
        Err(_) if input.strict => assert!(decoded.is_err(), "accepted {:02X?}", input.bytes),
        Err(_) => {}
    }
});

/// Split `bytes` into chunks using a deterministic seed.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
/// * Cut points ignore code point boundaries.
fn split_into_chunks(bytes: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = bytes.len();
    let mut seed = split_seed;

    while start < len {
        let remaining = len - start;
        let size = (seed as usize % remaining) + 1;
        chunks.push(&bytes[start..start + size]);
        start += size;
        seed = seed.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
    }

    chunks
}
