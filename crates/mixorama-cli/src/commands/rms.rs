//! RMS command implementation
//!
//! Folds inputs together two at a time with RMS mixing, low-pass filters the
//! result at the highest frequency estimated across the inputs and normalizes
//! it to the loudest input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use mixorama_dsp::MixStrategy;

use super::pipeline::{frequency_estimate, load_input, MixSession};
use super::report::MixReport;
use super::reporting::{emit_json, print_mix_header, print_mix_report};

/// Options for the rms command.
#[derive(Debug, Clone)]
pub struct RmsOptions {
    /// Input files, at least two
    pub inputs: Vec<PathBuf>,
    /// Output file
    pub output: PathBuf,
}

/// Run the rms command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &RmsOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return emit_json(mix(options));
    }

    print_mix_header("rms", options.inputs.len());
    let report = mix(options)?;
    if report.cutoff_hz.is_none() {
        println!(
            "  {}",
            "No zero crossings found in any input; nothing to filter.".dimmed()
        );
    }
    print_mix_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// Mixes the inputs and writes the output file.
pub fn mix(options: &RmsOptions) -> Result<MixReport> {
    let (first_path, rest) = options
        .inputs
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("at least one input file is required"))?;

    let strategy = MixStrategy::Rms;

    let first = load_input(first_path)?;
    let mut highest_frequency = frequency_estimate(&first);
    let mut session = MixSession::new(first_path, first);

    for path in rest {
        let wave = load_input(path)?;
        highest_frequency = highest_frequency.max(frequency_estimate(&wave));
        session.fold(path, &wave, &strategy)?;
    }

    session.finish(&strategy, Some(highest_frequency), &options.output)
}
