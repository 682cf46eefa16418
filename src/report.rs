//! Text rendering of sequences, spectra and naive-vs-fast comparisons.
//!
//! Values are joined with `", "`. Complex bins are written as `re+imi` or
//! `re-imi`.

use core::fmt::{self, Display, Write as _};

use realfft::num_traits::{One, Signed, Zero};

use crate::convolve::ConvolutionTrace;
use crate::num::{Complex, FftNum, RealSequence};

const SEPARATOR: &str = ", ";

/// Render real samples as comma-separated values.
pub fn format_real<T: Display>(seq: &[T]) -> String {
    let mut out = String::new();
    for (i, x) in seq.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{x}");
    }
    out
}

/// Render one complex value as `re+imi` / `re-imi`.
pub fn format_bin<T: FftNum + Display + PartialOrd>(c: &Complex<T>) -> String {
    if c.im < T::zero() {
        format!("{}-{}i", c.re, -c.im)
    } else {
        format!("{}+{}i", c.re, c.im)
    }
}

/// Render complex bins as comma-separated values.
pub fn format_complex<T: FftNum + Display + PartialOrd>(seq: &[Complex<T>]) -> String {
    seq.iter()
        .map(format_bin)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Results of both convolution paths for the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    /// Output of the direct sum.
    pub naive: RealSequence<T>,
    /// Output of the FFT path.
    pub fft: RealSequence<T>,
}

impl<T: FftNum + PartialOrd> Comparison<T> {
    /// Pair up two results.
    pub fn new(naive: RealSequence<T>, fft: RealSequence<T>) -> Self {
        Self { naive, fft }
    }

    /// Largest absolute difference between corresponding samples,
    /// or `None` if the lengths differ.
    pub fn max_abs_diff(&self) -> Option<T> {
        if self.naive.len() != self.fft.len() {
            return None;
        }
        Some(
            self.naive
                .iter()
                .zip(self.fft.iter())
                .map(|(&x, &y)| (x - y).abs())
                .fold(T::zero(), |acc, d| if d > acc { d } else { acc }),
        )
    }

    /// `true` when both results have the same length and every sample
    /// differs by at most `tol` times the largest naive magnitude (or `tol`
    /// itself for results smaller than one).
    pub fn agrees_within(&self, tol: T) -> bool {
        let scale = self
            .naive
            .iter()
            .map(|x| x.abs())
            .fold(T::one(), |acc, x| if x > acc { x } else { acc });
        match self.max_abs_diff() {
            Some(diff) => diff <= tol * scale,
            None => false,
        }
    }
}

impl<T: FftNum + Display + PartialOrd> Display for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "naive: {}", format_real(&self.naive))?;
        writeln!(f, "fft:   {}", format_real(&self.fft))?;
        match self.max_abs_diff() {
            Some(diff) => write!(f, "max |naive - fft|: {diff}"),
            None => write!(
                f,
                "length mismatch: naive {} vs fft {}",
                self.naive.len(),
                self.fft.len()
            ),
        }
    }
}

/// Multi-line rendering of every stage of an FFT convolution.
pub fn format_trace<T: FftNum + Display + PartialOrd>(trace: &ConvolutionTrace<T>) -> String {
    format!(
        "a: {}\nFFT(a): {}\nb: {}\nFFT(b): {}\nFFT(a)*FFT(b): {}\nresult: {}",
        format_real(&trace.padded_a),
        format_complex(&trace.spectrum_a),
        format_real(&trace.padded_b),
        format_complex(&trace.spectrum_b),
        format_complex(&trace.product),
        format_real(&trace.result),
    )
}
