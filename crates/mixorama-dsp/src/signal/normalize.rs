//! Peak detection and peak normalization.

use crate::saturate::saturate_f64;
use crate::Sample;

/// Returns the largest absolute sample value, or 0 for an empty waveform.
///
/// `|i16::MIN|` does not fit in a sample, so it is reported as `i16::MAX`.
pub fn peak_amplitude(samples: &[Sample]) -> Sample {
    samples
        .iter()
        .map(|s| s.saturating_abs())
        .max()
        .unwrap_or(0)
}

/// Scales a waveform so its peak amplitude equals `target_peak`.
///
/// Silent input (peak of 0) is returned unchanged. Otherwise every sample is
/// multiplied by `target_peak / current_peak`, rounded and saturated.
///
/// # Arguments
/// * `samples` - Waveform to scale
/// * `target_peak` - Desired peak amplitude
pub fn normalize(samples: &[Sample], target_peak: Sample) -> Vec<Sample> {
    let current_peak = peak_amplitude(samples);
    if current_peak == 0 {
        return samples.to_vec();
    }

    let scale = target_peak as f64 / current_peak as f64;
    samples
        .iter()
        .map(|&s| saturate_f64(s as f64 * scale))
        .collect()
}
