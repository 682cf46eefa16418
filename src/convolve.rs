//! Full linear convolution of real sequences.
//!
//! Two paths produce the same `a.len() + b.len() - 1` samples:
//!
//! - [`convolve_naive`] evaluates the defining double sum directly. It is
//!   `O(na·nb)` and serves as the reference the fast path is checked against.
//! - [`convolve_fft`] zero-pads both inputs to the full output length,
//!   transforms them, multiplies the spectra and transforms back. Padding to
//!   at least `na + nb - 1` samples is what keeps the circular convolution
//!   computed by the transform from wrapping around onto itself.
//!
//! An empty input on either side yields an empty result on both paths and no
//! transform is planned.

use core::fmt;

use crate::error::ConvError;
use crate::num::{len_as, zero, ComplexSequence, FftNum, RealSequence};
use crate::rfft::{ComplexToRealExecutor, RealToComplexExecutor, TransformPlanner};
use crate::spectral::spectral_multiply_into;

/// Which algorithm [`convolve`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolveMethod {
    /// Direct evaluation of the convolution sum.
    Naive,
    /// Zero-padded real FFT, spectral product and inverse FFT.
    #[default]
    Fft,
}

impl fmt::Display for ConvolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolveMethod::Naive => write!(f, "naive"),
            ConvolveMethod::Fft => write!(f, "fft"),
        }
    }
}

/// Length of the full linear convolution, or `None` if either input is empty.
#[inline]
pub fn full_len(na: usize, nb: usize) -> Option<usize> {
    if na == 0 || nb == 0 {
        None
    } else {
        Some(na + nb - 1)
    }
}

/// Convolve `a` and `b` with the selected `method`.
pub fn convolve<T: FftNum>(
    a: &[T],
    b: &[T],
    method: ConvolveMethod,
) -> Result<RealSequence<T>, ConvError> {
    match method {
        ConvolveMethod::Naive => Ok(convolve_naive(a, b)),
        ConvolveMethod::Fft => convolve_fft(a, b),
    }
}

/// Direct convolution:
/// `result[i] = a[i]*b[0] + a[i-1]*b[1] + ... + a[0]*b[i]`,
/// with terms outside either input omitted.
pub fn convolve_naive<T: FftNum>(a: &[T], b: &[T]) -> RealSequence<T> {
    let Some(n) = full_len(a.len(), b.len()) else {
        return Vec::new();
    };
    trace!("naive convolution of {} x {} samples", a.len(), b.len());
    let mut result = vec![zero::<T>(); n];
    for (i, out) in result.iter_mut().enumerate() {
        let lo = (i + 1).saturating_sub(b.len());
        let hi = i.min(a.len() - 1);
        let mut sum = zero::<T>();
        for j in lo..=hi {
            sum = sum + a[j] * b[i - j];
        }
        *out = sum;
    }
    result
}

/// Convolution through the convolution theorem.
///
/// # Errors
///
/// [`ConvError::InvalidLength`] if the output length cannot be converted to
/// `T`, or a backend error from the transform.
pub fn convolve_fft<T: FftNum>(a: &[T], b: &[T]) -> Result<RealSequence<T>, ConvError> {
    let Some(padded) = full_len(a.len(), b.len()) else {
        return Ok(Vec::new());
    };
    let scale = normalization::<T>(padded)?;
    debug!("fft convolution of {} x {} samples, padded to {}", a.len(), b.len(), padded);
    let mut stages = Stages::new(padded)?;
    stages.run(a, b, scale)
}

/// Intermediate stages of an FFT convolution, for inspection and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionTrace<T: FftNum> {
    /// `a` zero-padded to the output length.
    pub padded_a: RealSequence<T>,
    /// `b` zero-padded to the output length.
    pub padded_b: RealSequence<T>,
    /// Half-spectrum of `padded_a`.
    pub spectrum_a: ComplexSequence<T>,
    /// Half-spectrum of `padded_b`.
    pub spectrum_b: ComplexSequence<T>,
    /// Bin-wise product of the two spectra.
    pub product: ComplexSequence<T>,
    /// Normalized convolution result.
    pub result: RealSequence<T>,
}

impl<T: FftNum> ConvolutionTrace<T> {
    fn empty() -> Self {
        Self {
            padded_a: Vec::new(),
            padded_b: Vec::new(),
            spectrum_a: Vec::new(),
            spectrum_b: Vec::new(),
            product: Vec::new(),
            result: Vec::new(),
        }
    }
}

/// Like [`convolve_fft`], additionally returning every intermediate buffer.
pub fn convolve_fft_traced<T: FftNum>(a: &[T], b: &[T]) -> Result<ConvolutionTrace<T>, ConvError> {
    let Some(padded) = full_len(a.len(), b.len()) else {
        return Ok(ConvolutionTrace::empty());
    };
    let scale = normalization::<T>(padded)?;
    let mut stages = Stages::new(padded)?;
    let result = stages.run(a, b, scale)?;
    Ok(ConvolutionTrace {
        padded_a: stages.fft_a.input().to_vec(),
        padded_b: stages.fft_b.input().to_vec(),
        spectrum_a: stages.fft_a.get_output(),
        spectrum_b: stages.fft_b.get_output(),
        product: stages.ifft.input().to_vec(),
        result,
    })
}

impl<T: FftNum> TransformPlanner<T> {
    /// FFT convolution using plans cached in this planner.
    ///
    /// Repeated convolutions with the same output length only plan once.
    pub fn convolve(&mut self, a: &[T], b: &[T]) -> Result<RealSequence<T>, ConvError> {
        let Some(padded) = full_len(a.len(), b.len()) else {
            return Ok(Vec::new());
        };
        let scale = normalization::<T>(padded)?;
        let mut stages = Stages {
            fft_a: RealToComplexExecutor::with_planner(self, padded)?,
            fft_b: RealToComplexExecutor::with_planner(self, padded)?,
            ifft: ComplexToRealExecutor::with_planner(self, padded)?,
        };
        stages.run(a, b, scale)
    }
}

fn normalization<T: FftNum>(padded: usize) -> Result<T, ConvError> {
    len_as::<T>(padded).ok_or(ConvError::InvalidLength(padded))
}

/// The three executors of one FFT convolution, all sized to the padded length.
struct Stages<T: FftNum> {
    fft_a: RealToComplexExecutor<T>,
    fft_b: RealToComplexExecutor<T>,
    ifft: ComplexToRealExecutor<T>,
}

impl<T: FftNum> Stages<T> {
    fn new(padded: usize) -> Result<Self, ConvError> {
        Ok(Self {
            fft_a: RealToComplexExecutor::new(padded)?,
            fft_b: RealToComplexExecutor::new(padded)?,
            ifft: ComplexToRealExecutor::new(padded)?,
        })
    }

    fn run(&mut self, a: &[T], b: &[T], scale: T) -> Result<RealSequence<T>, ConvError> {
        self.fft_a.set_input_zeropadded(a)?;
        self.fft_a.execute()?;
        self.fft_b.set_input_zeropadded(b)?;
        self.fft_b.execute()?;

        spectral_multiply_into(
            self.fft_a.output(),
            self.fft_b.output(),
            self.ifft.input_mut(),
        )?;
        self.ifft.execute()?;

        // The inverse transform is unnormalized.
        Ok(self.ifft.output().iter().map(|&x| x / scale).collect())
    }
}
