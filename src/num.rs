//! Sample and spectrum types.
//!
//! Real sequences are plain slices/vectors of an [`FftNum`] (`f32` or `f64`).
//! Spectra use the `num_complex` type re-exported by the transform backend so
//! that executor buffers can be handed to it without conversion.

use realfft::num_traits::{FromPrimitive, Zero};

pub use realfft::num_complex::Complex;
pub use realfft::FftNum;

/// Single-precision complex value.
pub type Complex32 = Complex<f32>;
/// Double-precision complex value.
pub type Complex64 = Complex<f64>;

/// Ordered real samples; index is time.
pub type RealSequence<T> = Vec<T>;

/// Ordered complex bins; index is frequency.
pub type ComplexSequence<T> = Vec<Complex<T>>;

/// Number of non-redundant bins in the spectrum of a real length-`n` signal.
#[inline]
pub const fn half_spectrum_len(n: usize) -> usize {
    n / 2 + 1
}

/// Convert a transform length into the sample type.
///
/// Lengths above the type's exact integer range round to the nearest
/// representable value, which is far below the transform's own rounding
/// error. Returns `None` only if the conversion itself fails.
pub fn len_as<T: FftNum>(n: usize) -> Option<T> {
    <T as FromPrimitive>::from_usize(n)
}

#[inline]
pub(crate) fn zero<T: FftNum>() -> T {
    <T as Zero>::zero()
}

#[inline]
pub(crate) fn complex_zero<T: FftNum>() -> Complex<T> {
    Complex::new(zero(), zero())
}
