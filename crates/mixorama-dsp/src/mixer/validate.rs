//! Input validation shared by every mixing strategy.

use crate::error::{MixError, MixResult};
use crate::Sample;

/// Checks that `inputs` is non-empty and that every waveform is as long as
/// the first one.
///
/// # Returns
/// The common waveform length.
pub(crate) fn common_length<S: AsRef<[Sample]>>(inputs: &[S]) -> MixResult<usize> {
    let expected = match inputs.first() {
        Some(first) => first.as_ref().len(),
        None => return Err(MixError::EmptyInput),
    };

    for (index, input) in inputs.iter().enumerate().skip(1) {
        let found = input.as_ref().len();
        if found != expected {
            return Err(MixError::LengthMismatch {
                index,
                expected,
                found,
            });
        }
    }

    Ok(expected)
}
