use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use fastconv::convolve::{convolve, convolve_fft_traced, ConvolveMethod};
use fastconv::report::{format_real, format_trace, Comparison};

/// Samples of the first default input.
pub const DEFAULT_A: &str = "2,1,1,1,1,1,1,1,1";
/// Samples of the second default input.
pub const DEFAULT_B: &str = "1,0,7";

/// Convolution paths selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Naive,
    Fft,
    /// Run both paths and report how far apart they are.
    Both,
}

impl Method {
    /// Library methods to run, in report order.
    pub fn paths(self) -> &'static [ConvolveMethod] {
        match self {
            Method::Naive => &[ConvolveMethod::Naive],
            Method::Fft => &[ConvolveMethod::Fft],
            Method::Both => &[ConvolveMethod::Naive, ConvolveMethod::Fft],
        }
    }
}

/// Parse a list of samples separated by commas and/or whitespace.
///
/// An empty or blank string is an empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("invalid sample `{tok}`"))
        })
        .collect()
}

/// Build the console report for convolving `a` with `b`.
pub fn render(a: &[f64], b: &[f64], method: Method, verbose: bool) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "First vector (a): {}", format_real(a))?;
    writeln!(out, "Second vector (b): {}", format_real(b))?;

    let mut naive = None;
    let mut fft = None;
    for &path in method.paths() {
        let title = match path {
            ConvolveMethod::Naive => "Naive",
            ConvolveMethod::Fft => "FFT",
        };
        writeln!(out, "==== {title} convolution ====")?;
        let result = if path == ConvolveMethod::Fft && verbose {
            let trace = convolve_fft_traced(a, b).context("FFT convolution failed")?;
            writeln!(out, "{}", format_trace(&trace))?;
            trace.result
        } else {
            convolve(a, b, path).with_context(|| format!("{path} convolution failed"))?
        };
        log::debug!("{path} result has {} samples", result.len());
        writeln!(out, "{title} convolution result:\n{}", format_real(&result))?;
        match path {
            ConvolveMethod::Naive => naive = Some(result),
            ConvolveMethod::Fft => fft = Some(result),
        }
    }

    if let (Some(naive), Some(fft)) = (naive, fft) {
        let cmp = Comparison::new(naive, fft);
        if let Some(diff) = cmp.max_abs_diff() {
            writeln!(out, "max |naive - fft|: {diff:e}")?;
        }
    }
    Ok(out)
}
