//! WAV saving.

use std::io::{Seek, Write};
use std::path::Path;

use super::format::WavFormat;
use crate::error::MixResult;
use crate::Sample;

/// Saves samples as a single-channel 16-bit PCM WAV file.
pub fn save_wav(path: impl AsRef<Path>, samples: &[Sample], sample_rate: u32) -> MixResult<()> {
    save_wav_with_format(path, samples, WavFormat::mono(sample_rate))
}

/// Saves interleaved samples as a 16-bit PCM WAV file with the given format.
pub fn save_wav_with_format(
    path: impl AsRef<Path>,
    samples: &[Sample],
    format: WavFormat,
) -> MixResult<()> {
    let writer = hound::WavWriter::create(path, format.into())?;
    write_samples(writer, samples)
}

/// Writes interleaved samples as a 16-bit PCM WAV stream.
pub fn write_wav<W: Write + Seek>(
    writer: W,
    samples: &[Sample],
    format: WavFormat,
) -> MixResult<()> {
    let writer = hound::WavWriter::new(writer, format.into())?;
    write_samples(writer, samples)
}

fn write_samples<W: Write + Seek>(
    mut writer: hound::WavWriter<W>,
    samples: &[Sample],
) -> MixResult<()> {
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
