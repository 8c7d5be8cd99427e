//! WAV loading.

use std::io::Read;
use std::path::Path;

use crate::error::{MixError, MixResult};
use crate::Sample;

/// Samples and format read from a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavData {
    /// Interleaved 16-bit samples.
    pub samples: Vec<Sample>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count of `samples`. Mono files are loaded as 2.
    pub channels: u16,
}

impl WavData {
    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.samples.len() / n as usize,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }
}

/// Loads a WAV file from disk.
///
/// See [`read_wav`] for the conversion rules.
///
/// # Errors
/// - [`MixError::Io`] if the file cannot be opened or read
/// - [`MixError::Wav`] if the file is not a valid WAV
/// - [`MixError::UnsupportedFormat`] for float or unusual bit-depth files
pub fn load_wav(path: impl AsRef<Path>) -> MixResult<WavData> {
    let reader = hound::WavReader::open(path)?;
    decode(reader)
}

/// Reads a WAV stream.
///
/// - Integer samples of 8, 16, 24 or 32 bits are narrowed to 16 bits.
/// - Mono input is duplicated into interleaved left/right.
/// - Stereo and wider input is passed through interleaved.
pub fn read_wav<R: Read>(reader: R) -> MixResult<WavData> {
    decode(hound::WavReader::new(reader)?)
}

fn decode<R: Read>(reader: hound::WavReader<R>) -> MixResult<WavData> {
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(MixError::unsupported(format!(
            "only PCM integer samples are supported, got {:?}",
            spec.sample_format
        )));
    }
    if !matches!(spec.bits_per_sample, 8 | 16 | 24 | 32) {
        return Err(MixError::unsupported(format!(
            "{} bits per sample (supported: 8, 16, 24, 32)",
            spec.bits_per_sample
        )));
    }

    let bits = spec.bits_per_sample;
    let decoded = reader
        .into_samples::<i32>()
        .map(|s| s.map(|v| narrow_to_16(v, bits)))
        .collect::<Result<Vec<Sample>, _>>()?;

    let (samples, channels) = if spec.channels == 1 {
        (decoded.iter().flat_map(|&s| [s, s]).collect(), 2)
    } else {
        (decoded, spec.channels)
    };

    Ok(WavData {
        samples,
        sample_rate: spec.sample_rate,
        channels,
    })
}

/// Rescales a sample of the given bit depth to 16 bits.
fn narrow_to_16(value: i32, bits: u16) -> Sample {
    if bits <= 16 {
        (value << (16 - bits)) as Sample
    } else {
        (value >> (bits - 16)) as Sample
    }
}
