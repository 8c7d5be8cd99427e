//! Mixorama DSP core
//!
//! Fixed-point audio-sample manipulation on 16-bit PCM buffers.
//!
//! # Overview
//!
//! Every operation is a single pass over a buffer that is fully resident in
//! memory. Inputs are borrowed and never modified; each call allocates and
//! returns its own output. Wider intermediate values are narrowed back into
//! the sample range through [`saturate`], so mixing loud inputs clips instead
//! of wrapping around.
//!
//! - **Mixing** - [`linear_sum`], [`weighted_sum`] and [`rms_mix`] fold N
//!   equal-length waveforms into one
//! - **Signal utilities** - [`peak_amplitude`], [`normalize`],
//!   [`low_pass_filter`] and [`highest_frequency_estimate`]
//! - **Padding** - [`pad_to_equal_length`] extends the shorter buffer with
//!   silence
//! - **WAV I/O** - [`load_wav`] and [`save_wav`], backed by `hound`
//!
//! # Example
//!
//! ```no_run
//! use mixorama_dsp::{load_wav, normalize, pad_to_equal_length, peak_amplitude, rms_mix, save_wav};
//!
//! let a = load_wav("a.wav")?;
//! let b = load_wav("b.wav")?;
//! let target = peak_amplitude(&a.samples).max(peak_amplitude(&b.samples));
//!
//! let (a, b) = pad_to_equal_length(&a.samples, &b.samples);
//! let mixed = rms_mix(&[a, b])?;
//! save_wav("mixed.wav", &normalize(&mixed, target), 44100)?;
//! # Ok::<(), mixorama_dsp::MixError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`mixer`] - Mixing strategies
//! - [`signal`] - Peak, normalization, low-pass filter, frequency estimate
//! - [`pad`] - Zero-padding to a common length
//! - [`saturate`] - Clamp-to-range helpers
//! - [`wav`] - WAV codec adapter

pub mod error;
pub mod mixer;
pub mod pad;
pub mod saturate;
pub mod signal;
pub mod wav;

/// One 16-bit signed PCM amplitude value.
pub type Sample = i16;

// Re-export main types at crate root
pub use error::{MixError, MixResult};
pub use mixer::{linear_sum, rms_mix, weighted_sum, MixStrategy};
pub use pad::{pad_to_equal_length, pad_to_length};
pub use signal::{
    highest_frequency_estimate, low_pass_filter, normalize, peak_amplitude, zero_crossings,
};
pub use wav::{load_wav, save_wav, save_wav_with_format, WavData, WavFormat};
