use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Unlike splitting a `&str`, the cut points ignore code point boundaries,
/// so multi-byte sequences regularly straddle two chunks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    let chunk_size = payload.len().div_ceil(parts);
    payload.chunks(chunk_size).collect()
}
