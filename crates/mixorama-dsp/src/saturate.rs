//! Saturating conversions into the 16-bit sample range.
//!
//! Every mixing and scaling operation accumulates in a wider type and narrows
//! through one of these helpers. Clamping is silent: out-of-range values are
//! pinned to the nearest bound instead of wrapping.

use crate::Sample;

const MIN: i64 = Sample::MIN as i64;
const MAX: i64 = Sample::MAX as i64;

/// Clamps a 64-bit accumulator into the sample range.
#[inline]
pub fn saturate_i64(value: i64) -> Sample {
    value.clamp(MIN, MAX) as Sample
}

/// Clamps a 32-bit accumulator into the sample range.
#[inline]
pub fn saturate_i32(value: i32) -> Sample {
    saturate_i64(value as i64)
}

/// Rounds to the nearest integer and clamps into the sample range.
///
/// NaN narrows to 0.
#[inline]
pub fn saturate_f64(value: f64) -> Sample {
    value
        .round()
        .clamp(Sample::MIN as f64, Sample::MAX as f64) as Sample
}
