//! Linear command implementation
//!
//! Folds inputs together two at a time by averaging them, smooths the result
//! with a fixed-cutoff low-pass filter and normalizes it to the loudest input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use mixorama_dsp::MixStrategy;

use super::pipeline::{load_input, MixSession};
use super::report::MixReport;
use super::reporting::{emit_json, print_mix_header, print_mix_report};

/// Default low-pass cutoff, removing high-frequency noise above 15 kHz.
pub const DEFAULT_CUTOFF_HZ: f64 = 15_000.0;

/// Options for the linear command.
#[derive(Debug, Clone)]
pub struct LinearOptions {
    /// Input files, at least two
    pub inputs: Vec<PathBuf>,
    /// Output file
    pub output: PathBuf,
    /// Low-pass cutoff in Hz
    pub cutoff_hz: f64,
}

/// Run the linear command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &LinearOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return emit_json(mix(options));
    }

    print_mix_header("linear", options.inputs.len());
    let report = mix(options)?;
    print_mix_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// Mixes the inputs and writes the output file.
pub fn mix(options: &LinearOptions) -> Result<MixReport> {
    let (first_path, rest) = options
        .inputs
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("at least one input file is required"))?;

    // Averaging: each new input contributes half of the running mix.
    let strategy = MixStrategy::Weighted(vec![0.5, 0.5]);

    let mut session = MixSession::new(first_path, load_input(first_path)?);
    for path in rest {
        let wave = load_input(path)?;
        session.fold(path, &wave, &strategy)?;
    }

    session.finish(&strategy, Some(options.cutoff_hz), &options.output)
}
