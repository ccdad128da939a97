/// Validation policy for a [`Utf8Decoder`](crate::Utf8Decoder).
///
/// The defaults reproduce the permissive profile: only the 2-byte overlong
/// forms and values above U+10FFFF are rejected, and surrogate code points
/// decoded from 3-byte sequences are passed through as single code units.
///
/// # Examples
///
/// ```rust
/// use utf8modem::{DecoderOptions, Utf8Decoder};
///
/// let options = DecoderOptions {
///     reject_surrogates: true,
///     ..Default::default()
/// };
/// let mut decoder = Utf8Decoder::with_options(Vec::<u16>::new(), options);
/// assert!(decoder.feed(&[0xED, 0xA0, 0x80]).is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Whether to reject sequences that decode to U+D800..=U+DFFF.
    ///
    /// Those values are not Unicode scalar values. When `false` they are
    /// emitted as a lone 16-bit code unit, which keeps the output a valid
    /// WTF-16 sequence but not valid UTF-16.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogates: bool,

    /// Whether to reject overlong forms of every sequence length.
    ///
    /// When `false`, only 2-byte sequences led by `0xC0` or `0xC1` are
    /// checked. When `true`, 3 to 6 byte sequences must also encode a value
    /// that does not fit in a shorter form, e.g. `E0 80 AF` is rejected.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_overlong: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(skip))]
    /// Panic on decode errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}

impl DecoderOptions {
    /// Options under which the decoder accepts exactly the byte strings
    /// that [`core::str::from_utf8`] accepts.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_surrogates: true,
            reject_overlong: true,
            ..Self::default()
        }
    }
}
