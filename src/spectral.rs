//! Element-wise (bin by bin) products of spectra.
//!
//! By the convolution theorem, multiplying the spectra of two zero-padded
//! signals corresponds to circularly convolving them in time.

use crate::error::ConvError;
use crate::num::{Complex, ComplexSequence, FftNum};

/// Multiply two spectra bin by bin.
///
/// # Errors
///
/// [`ConvError::LengthMismatch`] if `a` and `b` differ in length.
pub fn spectral_multiply<T: FftNum>(
    a: &[Complex<T>],
    b: &[Complex<T>],
) -> Result<ComplexSequence<T>, ConvError> {
    check_len("b", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x * y).collect())
}

/// Multiply two spectra bin by bin into `out`.
///
/// # Errors
///
/// [`ConvError::LengthMismatch`] if `b` or `out` differ in length from `a`.
pub fn spectral_multiply_into<T: FftNum>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    out: &mut [Complex<T>],
) -> Result<(), ConvError> {
    check_len("b", a.len(), b.len())?;
    check_len("out", a.len(), out.len())?;
    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = x * y;
    }
    Ok(())
}

fn check_len(arg: &'static str, expected: usize, got: usize) -> Result<(), ConvError> {
    if expected != got {
        return Err(ConvError::LengthMismatch { arg, expected, got });
    }
    Ok(())
}
