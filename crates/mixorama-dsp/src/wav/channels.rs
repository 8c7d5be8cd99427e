//! Interleaved channel helpers.

use crate::Sample;

/// Splits an interleaved buffer into one buffer per channel.
///
/// A trailing partial frame is dropped. `channels` of 0 yields no channels.
pub fn deinterleave(samples: &[Sample], channels: u16) -> Vec<Vec<Sample>> {
    let channels = channels as usize;
    if channels == 0 {
        return Vec::new();
    }

    let frames = samples.len() / channels;
    let mut split = vec![Vec::with_capacity(frames); channels];
    for frame in samples.chunks_exact(channels) {
        for (channel, &s) in split.iter_mut().zip(frame) {
            channel.push(s);
        }
    }
    split
}

/// Interleaves per-channel buffers into one buffer.
///
/// Output length is `shortest channel * channel count`.
pub fn interleave<S: AsRef<[Sample]>>(channels: &[S]) -> Vec<Sample> {
    let frames = channels
        .iter()
        .map(|c| c.as_ref().len())
        .min()
        .unwrap_or(0);

    let mut interleaved = Vec::with_capacity(frames * channels.len());
    for i in 0..frames {
        for channel in channels {
            interleaved.push(channel.as_ref()[i]);
        }
    }
    interleaved
}
