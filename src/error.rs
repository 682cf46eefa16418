use std::fmt;

/// Errors that can occur while planning, loading or executing transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvError {
    /// A transform of length zero was requested.
    EmptyInput,
    /// Zero-padded input is longer than the executor's input buffer.
    InputTooLong {
        /// Number of samples supplied.
        len: usize,
        /// Input buffer length of the executor.
        capacity: usize,
    },
    /// A buffer did not have the exact length required.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// The transform length cannot be converted to the sample type,
    /// so the inverse transform cannot be normalized.
    InvalidLength(usize),
    /// The transform backend rejected a call.
    Backend {
        /// Message reported by the backend.
        reason: String,
    },
}

impl ConvError {
    pub(crate) fn backend(err: realfft::FftError) -> Self {
        ConvError::Backend {
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvError::EmptyInput => write!(f, "transform length must be non-zero"),
            ConvError::InputTooLong { len, capacity } => write!(
                f,
                "input of {len} samples does not fit a transform of length {capacity}"
            ),
            ConvError::LengthMismatch { arg, expected, got } => write!(
                f,
                "length mismatch on `{arg}`: expected {expected}, got {got}"
            ),
            ConvError::InvalidLength(n) => {
                write!(f, "transform length {n} cannot be converted to a sample value")
            }
            ConvError::Backend { reason } => write!(f, "transform backend error: {reason}"),
        }
    }
}

impl std::error::Error for ConvError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_argument() {
        let err = ConvError::LengthMismatch {
            arg: "spectrum",
            expected: 6,
            got: 5,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch on `spectrum`: expected 6, got 5"
        );
    }

    #[test]
    fn display_input_too_long() {
        let err = ConvError::InputTooLong {
            len: 12,
            capacity: 11,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("11"));
    }
}
