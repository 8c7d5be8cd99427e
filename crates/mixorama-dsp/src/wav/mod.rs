//! WAV codec adapter.
//!
//! Container encode/decode is delegated to `hound`. This module only converts
//! between WAV files and flat 16-bit sample buffers:
//! - loading narrows any integer bit depth to 16 bits and duplicates mono
//!   files into interleaved stereo
//! - saving writes 16-bit PCM, single-channel unless a format says otherwise

mod channels;
mod format;
mod pcm;
mod reader;
mod writer;


// Re-export public API
pub use channels::{deinterleave, interleave};
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, samples_to_pcm16};
pub use reader::{load_wav, read_wav, WavData};
pub use writer::{save_wav, save_wav_with_format, write_wav};
