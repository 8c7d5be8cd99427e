//! Weighted command implementation
//!
//! Pads every input to the longest one and mixes them in a single weighted
//! sum, one weight per input in the order given.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use mixorama_dsp::{pad_to_length, weighted_sum, MixStrategy};

use super::pipeline::{load_input, MixSession};
use super::report::MixReport;
use super::reporting::{emit_json, print_mix_header, print_mix_report};

/// Options for the weighted command.
#[derive(Debug, Clone)]
pub struct WeightedOptions {
    /// Input files
    pub inputs: Vec<PathBuf>,
    /// One weight per input
    pub weights: Vec<f64>,
    /// Output file
    pub output: PathBuf,
    /// Optional low-pass cutoff in Hz
    pub cutoff_hz: Option<f64>,
}

/// Run the weighted command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &WeightedOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return emit_json(mix(options));
    }

    print_mix_header("weighted", options.inputs.len());
    let report = mix(options)?;
    print_mix_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// Mixes the inputs and writes the output file.
pub fn mix(options: &WeightedOptions) -> Result<MixReport> {
    let (first_path, rest) = options
        .inputs
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("at least one input file is required"))?;

    let first = load_input(first_path)?;
    let mut waves = vec![first.samples.clone()];
    let mut session = MixSession::new(first_path, first);

    for path in rest {
        let wave = load_input(path)?;
        session.check_format(path, &wave)?;
        session.track_peak(&wave.samples);
        session.add_input(path);
        waves.push(wave.samples);
    }

    let len = waves.iter().map(Vec::len).max().unwrap_or(0);
    let padded: Vec<_> = waves.iter().map(|w| pad_to_length(w, len)).collect();
    let mixed = weighted_sum(&options.weights, &padded).context("Weighted mixing failed")?;
    session.set_combined(mixed);

    let strategy = MixStrategy::Weighted(options.weights.clone());
    session.finish(&strategy, options.cutoff_hz, &options.output)
}
