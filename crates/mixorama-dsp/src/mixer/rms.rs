//! Root-mean-square mixing.

use super::validate::common_length;
use crate::error::MixResult;
use crate::saturate::saturate_f64;
use crate::Sample;

/// Mixes waveforms by taking the root mean square of each index.
///
/// `output[i] = sqrt(sum(input_j[i]^2) / N)` where `N` is the number of
/// inputs. The result is always non-negative: this is a magnitude mix, the
/// sign of the inputs is discarded.
///
/// # Errors
/// - [`crate::MixError::EmptyInput`] when `inputs` is empty
/// - [`crate::MixError::LengthMismatch`] when any input differs in length from the first
pub fn rms_mix<S: AsRef<[Sample]>>(inputs: &[S]) -> MixResult<Vec<Sample>> {
    let len = common_length(inputs)?;
    let count = inputs.len() as f64;

    let combined = (0..len)
        .map(|i| {
            let sum_squares: f64 = inputs
                .iter()
                .map(|w| {
                    let s = w.as_ref()[i] as f64;
                    s * s
                })
                .sum();
            // Lower bound of the clamp is unreachable for a real square root;
            // it stays so a negative rounding artifact still narrows safely.
            saturate_f64((sum_squares / count).sqrt())
        })
        .collect();

    Ok(combined)
}
