//! CLI command implementations

pub mod analyze;
pub mod linear;
pub mod report;
pub mod rms;
pub mod weighted;

mod pipeline;
mod reporting;

pub use pipeline::{load_input, InputError, DEFAULT_OUTPUT};
