//! Linear and weighted summation.

use super::validate::common_length;
use crate::error::{MixError, MixResult};
use crate::saturate::{saturate_f64, saturate_i64};
use crate::Sample;

/// Mixes waveforms by adding them together.
///
/// Each output sample is the saturated sum of the input samples at the same
/// index. The sum is accumulated in `i64`, so no realistic input count can
/// overflow before clamping.
///
/// # Errors
/// - [`MixError::EmptyInput`] when `inputs` is empty
/// - [`MixError::LengthMismatch`] when any input differs in length from the first
pub fn linear_sum<S: AsRef<[Sample]>>(inputs: &[S]) -> MixResult<Vec<Sample>> {
    let len = common_length(inputs)?;

    let combined = (0..len)
        .map(|i| {
            let sum: i64 = inputs.iter().map(|w| w.as_ref()[i] as i64).sum();
            saturate_i64(sum)
        })
        .collect();

    Ok(combined)
}

/// Mixes waveforms by scaling each one by its weight before summing.
///
/// `weights[j]` applies to `inputs[j]`. The weighted sum is accumulated in
/// `f64`, rounded, then saturated.
///
/// # Errors
/// - [`MixError::WeightCountMismatch`] when `weights.len() != inputs.len()`
/// - [`MixError::EmptyInput`] when `inputs` is empty
/// - [`MixError::LengthMismatch`] when any input differs in length from the first
pub fn weighted_sum<S: AsRef<[Sample]>>(weights: &[f64], inputs: &[S]) -> MixResult<Vec<Sample>> {
    if weights.len() != inputs.len() {
        return Err(MixError::WeightCountMismatch {
            weights: weights.len(),
            inputs: inputs.len(),
        });
    }
    let len = common_length(inputs)?;

    let combined = (0..len)
        .map(|i| {
            let sum: f64 = inputs
                .iter()
                .zip(weights)
                .map(|(w, &gain)| w.as_ref()[i] as f64 * gain)
                .sum();
            saturate_f64(sum)
        })
        .collect();

    Ok(combined)
}
