//! Shared mixing flow: load, check, fold, filter, normalize, save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mixorama_dsp::wav::{compute_pcm_hash, deinterleave, interleave};
use mixorama_dsp::{
    highest_frequency_estimate, load_wav, low_pass_filter, normalize, pad_to_equal_length,
    peak_amplitude, save_wav_with_format, MixStrategy, Sample, WavData, WavFormat,
};
use thiserror::Error;

use super::report::{error_codes, MixReport};

/// Output file used when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "combined.wav";

/// Inputs that cannot be mixed together.
#[derive(Debug, Error)]
pub enum InputError {
    /// Two inputs have different sample rates.
    #[error("Sample rate mismatch between {first} ({expected} Hz) and {other} ({found} Hz)")]
    SampleRateMismatch {
        /// Path of the first input
        first: String,
        /// Path of the mismatching input
        other: String,
        /// Sample rate of the first input
        expected: u32,
        /// Sample rate of the mismatching input
        found: u32,
    },

    /// Two inputs have different channel counts.
    #[error("Channel count mismatch between {first} ({expected}) and {other} ({found})")]
    ChannelMismatch {
        /// Path of the first input
        first: String,
        /// Path of the mismatching input
        other: String,
        /// Channel count of the first input
        expected: u16,
        /// Channel count of the mismatching input
        found: u16,
    },
}

impl InputError {
    /// Stable error code for machine-readable reporting.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::SampleRateMismatch { .. } => error_codes::SAMPLE_RATE_MISMATCH,
            InputError::ChannelMismatch { .. } => error_codes::CHANNEL_MISMATCH,
        }
    }
}

/// Loads a WAV file, attaching the path to any error.
pub fn load_input(path: &Path) -> Result<WavData> {
    load_wav(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Highest zero-crossing frequency estimate over the channels of `data`.
///
/// Channels are measured separately so interleaving does not distort the
/// crossing count.
pub(crate) fn frequency_estimate(data: &WavData) -> f64 {
    deinterleave(&data.samples, data.channels)
        .iter()
        .map(|channel| highest_frequency_estimate(channel, data.sample_rate))
        .fold(0.0, f64::max)
}

/// Runs the one-pole low-pass filter over each channel independently.
pub(crate) fn low_pass_channels(
    samples: &[Sample],
    channels: u16,
    sample_rate: u32,
    cutoff_hz: f64,
) -> Vec<Sample> {
    let filtered: Vec<Vec<Sample>> = deinterleave(samples, channels)
        .iter()
        .map(|channel| low_pass_filter(channel, sample_rate, cutoff_hz))
        .collect();
    interleave(&filtered)
}

/// Normalizes `samples` to `target_peak`, skipping silent audio and a zero
/// target.
///
/// # Returns
/// The samples and whether normalization was applied.
pub(crate) fn normalize_to_peak(samples: Vec<Sample>, target_peak: Sample) -> (Vec<Sample>, bool) {
    if target_peak == 0 || peak_amplitude(&samples) == 0 {
        return (samples, false);
    }
    (normalize(&samples, target_peak), true)
}

/// Running state while folding inputs into one buffer.
#[derive(Debug)]
pub(crate) struct MixSession {
    inputs: Vec<PathBuf>,
    sample_rate: u32,
    channels: u16,
    combined: Vec<Sample>,
    loudest_peak: Sample,
}

impl MixSession {
    /// Starts a session from the first input.
    pub(crate) fn new(path: &Path, first: WavData) -> Self {
        Self {
            inputs: vec![path.to_path_buf()],
            sample_rate: first.sample_rate,
            channels: first.channels,
            loudest_peak: peak_amplitude(&first.samples),
            combined: first.samples,
        }
    }

    /// Checks that `data` can be mixed with the first input.
    pub(crate) fn check_format(&self, path: &Path, data: &WavData) -> Result<(), InputError> {
        let first = self.inputs[0].display().to_string();
        if data.sample_rate != self.sample_rate {
            return Err(InputError::SampleRateMismatch {
                first,
                other: path.display().to_string(),
                expected: self.sample_rate,
                found: data.sample_rate,
            });
        }
        if data.channels != self.channels {
            return Err(InputError::ChannelMismatch {
                first,
                other: path.display().to_string(),
                expected: self.channels,
                found: data.channels,
            });
        }
        Ok(())
    }

    /// Records an input's peak as a normalization target candidate.
    pub(crate) fn track_peak(&mut self, samples: &[Sample]) {
        self.loudest_peak = self.loudest_peak.max(peak_amplitude(samples));
    }

    /// Records an input that was mixed in without going through [`fold`](Self::fold).
    pub(crate) fn add_input(&mut self, path: &Path) {
        self.inputs.push(path.to_path_buf());
    }

    /// Replaces the running mix.
    pub(crate) fn set_combined(&mut self, combined: Vec<Sample>) {
        self.combined = combined;
    }

    /// Pads the running mix and `data` to equal length and mixes them with
    /// `strategy`.
    pub(crate) fn fold(
        &mut self,
        path: &Path,
        data: &WavData,
        strategy: &MixStrategy,
    ) -> Result<()> {
        self.check_format(path, data)?;
        self.track_peak(&data.samples);

        let (combined, wave) = pad_to_equal_length(&self.combined, &data.samples);
        let mixed = strategy.mix(&[combined, wave]).with_context(|| {
            format!(
                "Error during {} mixing of {}",
                strategy.name(),
                path.display()
            )
        })?;

        self.combined = mixed;
        self.inputs.push(path.to_path_buf());
        Ok(())
    }

    /// Filters, normalizes and saves the mix.
    ///
    /// A cutoff of `None` (or not above zero) skips the low-pass filter.
    pub(crate) fn finish(
        self,
        strategy: &MixStrategy,
        cutoff_hz: Option<f64>,
        output: &Path,
    ) -> Result<MixReport> {
        let cutoff_hz = cutoff_hz.filter(|&hz| hz > 0.0);
        let filtered = match cutoff_hz {
            Some(hz) => low_pass_channels(&self.combined, self.channels, self.sample_rate, hz),
            None => self.combined,
        };

        let (samples, normalized) = normalize_to_peak(filtered, self.loudest_peak);

        let format = WavFormat::with_channels(self.channels, self.sample_rate);
        save_wav_with_format(output, &samples, format)
            .with_context(|| format!("Failed to save {}", output.display()))?;

        Ok(MixReport {
            strategy: strategy.name().to_string(),
            inputs: self
                .inputs
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            output: output.display().to_string(),
            sample_rate: self.sample_rate,
            channels: self.channels,
            frames: samples.len() / self.channels.max(1) as usize,
            loudest_peak: self.loudest_peak,
            cutoff_hz,
            normalized,
            pcm_hash: compute_pcm_hash(&samples),
        })
    }
}
