//! Zero-crossing frequency estimation.
//!
//! This is a coarse estimator, not spectral analysis. For a single steady tone
//! it lands near the tone's frequency; for mixtures of tones it over- or
//! under-counts, and that is expected.

use crate::Sample;

/// Counts strict sign changes between consecutive samples.
///
/// A zero sample is neither positive nor negative, so `[1, 0, -1]` has no
/// crossing.
pub fn zero_crossings(samples: &[Sample]) -> usize {
    samples
        .windows(2)
        .filter(|pair| (pair[0] > 0 && pair[1] < 0) || (pair[0] < 0 && pair[1] > 0))
        .count()
}

/// Estimates the highest frequency in a waveform from its zero crossings.
///
/// `frequency = crossings / (2 * duration)` with
/// `duration = len / sample_rate`. Returns 0.0 for waveforms of length <= 1.
pub fn highest_frequency_estimate(samples: &[Sample], sample_rate: u32) -> f64 {
    if samples.len() <= 1 {
        return 0.0;
    }

    let duration = samples.len() as f64 / sample_rate as f64;
    zero_crossings(samples) as f64 / (2.0 * duration)
}
