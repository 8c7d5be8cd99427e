//! JSON output types for machine-readable CLI output.
//!
//! These are emitted with `--json` instead of the colored human output.

use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
///
/// Errors coming from the DSP core keep their own `MIX_XXX` codes.
pub mod error_codes {
    /// Input or output file problem outside the WAV codec
    pub const FILE_IO: &str = "CLI_001";
    /// Inputs disagree on sample rate
    pub const SAMPLE_RATE_MISMATCH: &str = "CLI_002";
    /// Inputs disagree on channel count
    pub const CHANNEL_MISMATCH: &str = "CLI_003";
    /// Any other failure
    pub const OTHER: &str = "CLI_999";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_002", "MIX_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Result of a mix command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixReport {
    /// Mixing strategy used to fold the inputs ("linear", "weighted", "rms")
    pub strategy: String,
    /// Input files in the order they were mixed
    pub inputs: Vec<String>,
    /// Output file
    pub output: String,
    /// Sample rate shared by every input, in Hz
    pub sample_rate: u32,
    /// Channel count of the output file
    pub channels: u16,
    /// Samples per channel in the output
    pub frames: usize,
    /// Loudest peak across all inputs, used as the normalization target
    pub loudest_peak: i16,
    /// Low-pass cutoff applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_hz: Option<f64>,
    /// Whether normalization was applied (skipped for silent audio)
    pub normalized: bool,
    /// BLAKE3 hash of the output PCM data
    pub pcm_hash: String,
}

/// Result of the analyze command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeReport {
    /// Analyzed file
    pub input: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel count after loading (mono files load as stereo)
    pub channels: u16,
    /// Samples per channel
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak amplitude across all channels
    pub peak_amplitude: i16,
    /// Per-channel measurements
    pub channel_stats: Vec<ChannelStats>,
}

/// Measurements for one channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelStats {
    /// Channel index
    pub channel: usize,
    /// Peak amplitude
    pub peak_amplitude: i16,
    /// Number of zero crossings
    pub zero_crossings: usize,
    /// Zero-crossing frequency estimate in Hz
    pub frequency_estimate_hz: f64,
}

/// Top-level JSON envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Command result on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Errors on failure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl<T> JsonOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }
}
