//! Single-pass signal utilities: peak detection, normalization, smoothing
//! and a coarse frequency estimate.

mod filter;
mod frequency;
mod normalize;

#[cfg(test)]
mod tests_filter;
#[cfg(test)]
mod tests_normalization;

// Re-export public API
pub use filter::{low_pass_alpha, low_pass_filter};
pub use frequency::{highest_frequency_estimate, zero_crossings};
pub use normalize::{normalize, peak_amplitude};
