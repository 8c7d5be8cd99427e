//! Zero-padding waveforms to a common length.
//!
//! Padding never truncates. A waveform that is already long enough is
//! returned borrowed; only the one that needs extending is copied.

use std::borrow::Cow;

use crate::Sample;

/// Extends `samples` with trailing silence up to `len`.
///
/// Returns the input borrowed when it is already at least `len` samples long.
pub fn pad_to_length(samples: &[Sample], len: usize) -> Cow<'_, [Sample]> {
    if samples.len() >= len {
        return Cow::Borrowed(samples);
    }

    let mut padded = Vec::with_capacity(len);
    padded.extend_from_slice(samples);
    padded.resize(len, 0);
    Cow::Owned(padded)
}

/// Pads the shorter of two waveforms with trailing silence so both have the
/// same length. The longer waveform is left untouched.
pub fn pad_to_equal_length<'a>(
    a: &'a [Sample],
    b: &'a [Sample],
) -> (Cow<'a, [Sample]>, Cow<'a, [Sample]>) {
    let len = a.len().max(b.len());
    (pad_to_length(a, len), pad_to_length(b, len))
}
