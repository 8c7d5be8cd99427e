//! Raw PCM byte conversion and hashing.

use crate::Sample;

/// Converts samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[Sample]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Computes the BLAKE3 hash of the PCM bytes of `samples`.
///
/// Two buffers hash equal exactly when their samples are identical, which
/// makes this usable for comparing output across runs without the WAV header.
pub fn compute_pcm_hash(samples: &[Sample]) -> String {
    blake3::hash(&samples_to_pcm16(samples))
        .to_hex()
        .to_string()
}
