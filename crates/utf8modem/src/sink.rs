//! Destinations for decoded UTF-16 code units.

use alloc::vec::Vec;

/// Receives decoded output one UTF-16 code unit at a time.
///
/// A scalar value in the basic multilingual plane arrives as one unit; a
/// supplementary value arrives as a high surrogate followed immediately by
/// its low surrogate. Calls happen only inside
/// [`Utf8Decoder::feed`](crate::Utf8Decoder::feed), in stream order.
pub trait Sink {
    /// Accepts the next code unit.
    fn accept(&mut self, unit: u16);
}

impl Sink for Vec<u16> {
    #[inline]
    fn accept(&mut self, unit: u16) {
        self.push(unit);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn accept(&mut self, unit: u16) {
        (**self).accept(unit);
    }
}

/// A [`Sink`] that forwards every code unit to a closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

impl<F: FnMut(u16)> Sink for FromFn<F> {
    #[inline]
    fn accept(&mut self, unit: u16) {
        (self.0)(unit);
    }
}

impl<F> FromFn<F> {
    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

/// Wraps a closure as a [`Sink`].
///
/// ```rust
/// use utf8modem::{Utf8Decoder, sink};
///
/// let mut count = 0;
/// let mut decoder = Utf8Decoder::new(sink::from_fn(|_| count += 1));
/// decoder.feed("héllo".as_bytes()).unwrap();
/// decoder.finalize().unwrap();
/// drop(decoder);
/// assert_eq!(count, 5);
/// ```
pub fn from_fn<F: FnMut(u16)>(f: F) -> FromFn<F> {
    FromFn(f)
}
