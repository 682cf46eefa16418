//! # fastconv - FFT convolution of real sequences
//!
//! Full linear convolution of two real-valued sequences through the
//! convolution theorem, next to a direct `O(n·m)` reference implementation.
//!
//! ## Features
//!
//! - **Real-to-complex / complex-to-real executors** with owned, fixed-size
//!   buffers and a plan bound to one transform length
//! - **Half-spectrum transforms**: a real length-`n` signal maps to `n/2 + 1`
//!   complex bins
//! - **Zero-padding** to the full convolution length so the circular
//!   convolution computed by the transform equals the linear one
//! - **Plan caching** by transform length with bounded LRU eviction
//! - **Text reporting** of sequences, spectra and naive-vs-fast comparisons
//!
//! ## Cargo Features
//!
//! - `verbose-logging` (default): emit `log` records for executor
//!   construction, planner cache activity and convolution paths
//!
//! ## Transform backend
//!
//! Transforms are delegated to [`realfft`], which follows the same
//! conventions as FFTW: forward transforms produce `n/2 + 1` bins and the
//! inverse transform is **unnormalized** (scaled by `n`).
//!
//! ## Example
//!
//! ```
//! use fastconv::convolve::{convolve_fft, convolve_naive};
//!
//! let a: [f64; 9] = [2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
//! let b = [1.0, 0.0, 7.0];
//!
//! let naive = convolve_naive(&a, &b);
//! let fast = convolve_fft(&a, &b).unwrap();
//! assert_eq!(naive, vec![2.0, 1.0, 15.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 7.0, 7.0]);
//! for (x, y) in naive.iter().zip(fast.iter()) {
//!     assert!((x - y).abs() < 1e-9);
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#[macro_use]
mod macros;

/// Error type shared by every fallible operation.
pub mod error;

/// Sequence aliases and the complex number type.
pub mod num;

/// Real-to-complex and complex-to-real transform executors
/// and the plan cache they can share.
pub mod rfft;

/// Element-wise products of spectra.
pub mod spectral;

/// Naive and FFT-based linear convolution.
pub mod convolve;

/// Comma-separated rendering of sequences and comparisons.
pub mod report;

pub use convolve::{convolve, convolve_fft, convolve_naive, ConvolveMethod};
pub use error::ConvError;
pub use num::{Complex, Complex32, Complex64, FftNum};
pub use rfft::{ComplexToRealExecutor, RealToComplexExecutor, TransformPlanner};
