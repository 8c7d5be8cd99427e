//! Mixing strategies that fold several equal-length waveforms into one.
//!
//! Three strategies are provided:
//! - [`linear_sum`] - plain per-index addition
//! - [`weighted_sum`] - per-index addition with one gain per input
//! - [`rms_mix`] - per-index root mean square
//!
//! All of them share the same validation: at least one input, and every input
//! as long as the first. Padding inputs to a common length is the caller's job
//! (see [`crate::pad`]).

mod rms;
mod strategy;
mod summation;
mod validate;

#[cfg(test)]
mod tests_linear;
#[cfg(test)]
mod tests_rms;
#[cfg(test)]
mod tests_validation;
#[cfg(test)]
mod tests_weighted;

// Re-export public API
pub use rms::rms_mix;
pub use strategy::MixStrategy;
pub use summation::{linear_sum, weighted_sum};
