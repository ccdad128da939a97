//! Differential checks against `core::str::from_utf8`.

use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use super::utils::{decode_pieces, split_at_offsets};
use crate::DecoderOptions;

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 20_000 } else { 2_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

fn agrees_with_core(bytes: &[u8], splits: &[usize]) -> bool {
    let pieces = split_at_offsets(bytes, splits);
    let strict = decode_pieces(pieces.iter().copied(), DecoderOptions::strict());
    let permissive = decode_pieces(pieces, DecoderOptions::default());
    match core::str::from_utf8(bytes) {
        Ok(s) => {
            let expected: Vec<u16> = s.encode_utf16().collect();
            strict.as_ref() == Ok(&expected) && permissive.as_ref() == Ok(&expected)
        }
        Err(_) => strict.is_err(),
    }
}

/// Property: in strict mode the decoder accepts exactly what `from_utf8`
/// accepts, and both agree on the decoded text.
#[test]
fn arbitrary_bytes_match_core_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, splits: Vec<usize>) -> bool {
        agrees_with_core(&bytes, &splits)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}

/// Property: corrupting one byte of valid text is judged the same way
/// `from_utf8` judges it. Random bytes are rarely valid, so this keeps most
/// inputs close to well-formed.
#[test]
fn corrupted_text_matches_core_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, index: usize, byte: u8, splits: Vec<usize>) -> TestResult {
        if text.is_empty() {
            return TestResult::discard();
        }
        let mut bytes = text.into_bytes();
        let len = bytes.len();
        bytes[index % len] = byte;
        TestResult::from_bool(agrees_with_core(&bytes, &splits))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, usize, u8, Vec<usize>) -> TestResult);
}

#[test]
fn truncated_text_matches_core() {
    let text = "a€😀ü";
    for end in 0..=text.len() {
        assert!(agrees_with_core(&text.as_bytes()[..end], &[]), "prefix {end}");
    }
}
