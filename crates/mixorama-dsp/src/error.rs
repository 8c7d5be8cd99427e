//! Error types for the DSP core.

use thiserror::Error;

/// Result type for mixing and codec operations.
pub type MixResult<T> = Result<T, MixError>;

/// Errors that can occur while mixing or reading/writing waveforms.
#[derive(Debug, Error)]
pub enum MixError {
    /// No waveforms were supplied to a mixing strategy.
    #[error("no samples provided")]
    EmptyInput,

    /// A waveform's length differs from the first waveform's length.
    #[error("mismatched sample lengths: input {index} has {found} samples, expected {expected}")]
    LengthMismatch {
        /// Position of the offending waveform.
        index: usize,
        /// Length of the first waveform.
        expected: usize,
        /// Length of the offending waveform.
        found: usize,
    },

    /// Weight count differs from the waveform count.
    #[error("number of weights ({weights}) must match number of samples ({inputs})")]
    WeightCountMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of waveforms supplied.
        inputs: usize,
    },

    /// The WAV file uses a sample format the codec does not handle.
    #[error("unsupported WAV format: {message}")]
    UnsupportedFormat {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed WAV container or encoder failure.
    #[error("WAV error: {0}")]
    Wav(hound::Error),
}

impl From<hound::Error> for MixError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => MixError::Io(e),
            other => MixError::Wav(other),
        }
    }
}

impl MixError {
    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable reporting.
    pub fn code(&self) -> &'static str {
        match self {
            MixError::EmptyInput => "MIX_001",
            MixError::LengthMismatch { .. } => "MIX_002",
            MixError::WeightCountMismatch { .. } => "MIX_003",
            MixError::UnsupportedFormat { .. } => "MIX_004",
            MixError::Io(_) => "MIX_005",
            MixError::Wav(_) => "MIX_006",
        }
    }
}
