//! One-pole low-pass smoothing.

use std::f64::consts::PI;

use crate::Sample;

/// Smoothing coefficient of the one-pole filter.
///
/// `rc = 1 / (2 * pi * cutoff)`, `dt = 1 / sample_rate`,
/// `alpha = dt / (rc + dt)`.
pub fn low_pass_alpha(sample_rate: u32, cutoff_hz: f64) -> f64 {
    let rc = 1.0 / (2.0 * PI * cutoff_hz);
    let dt = 1.0 / sample_rate as f64;
    dt / (rc + dt)
}

/// Applies a one-pole exponential smoother (simple RC low-pass).
///
/// The first sample passes through unchanged. Each following output moves
/// toward the input by `alpha` of the difference and is truncated toward zero
/// to a sample. There is no separate clamp step: a smoothed value always lies
/// between the previous output and the current input.
///
/// # Arguments
/// * `samples` - Input waveform
/// * `sample_rate` - Sample rate in Hz, must be > 0
/// * `cutoff_hz` - Cutoff frequency in Hz, must be > 0
pub fn low_pass_filter(samples: &[Sample], sample_rate: u32, cutoff_hz: f64) -> Vec<Sample> {
    debug_assert!(sample_rate > 0, "sample rate must be positive");
    debug_assert!(cutoff_hz > 0.0, "cutoff frequency must be positive");

    let Some(&first) = samples.first() else {
        return Vec::new();
    };

    let alpha = low_pass_alpha(sample_rate, cutoff_hz);
    let mut filtered = Vec::with_capacity(samples.len());
    filtered.push(first);

    let mut prev = first as f64;
    for &s in &samples[1..] {
        let next = (prev + alpha * (s as f64 - prev)) as Sample;
        filtered.push(next);
        prev = next as f64;
    }

    filtered
}
