//! Mixorama CLI library.
//!
//! Caller-level mixing flows built on `mixorama-dsp`: loading inputs,
//! checking they share a format, folding them together, then filtering,
//! normalizing and saving the result.

pub mod commands;
