//! Strategy selection for callers that pick a mix mode at runtime.

use super::{linear_sum, rms_mix, weighted_sum};
use crate::error::MixResult;
use crate::Sample;

/// A mixing strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum MixStrategy {
    /// Plain saturated addition.
    Linear,
    /// Addition with one weight per input, in input order.
    Weighted(Vec<f64>),
    /// Root mean square of the inputs.
    Rms,
}

impl MixStrategy {
    /// Mixes `inputs` with this strategy.
    pub fn mix<S: AsRef<[Sample]>>(&self, inputs: &[S]) -> MixResult<Vec<Sample>> {
        match self {
            MixStrategy::Linear => linear_sum(inputs),
            MixStrategy::Weighted(weights) => weighted_sum(weights, inputs),
            MixStrategy::Rms => rms_mix(inputs),
        }
    }

    /// Short lowercase name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            MixStrategy::Linear => "linear",
            MixStrategy::Weighted(_) => "weighted",
            MixStrategy::Rms => "rms",
        }
    }
}
