//! Human-readable and JSON printing shared by the commands.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use mixorama_dsp::MixError;
use serde::Serialize;

use super::pipeline::InputError;
use super::report::{error_codes, JsonError, JsonOutput, MixReport};

/// Maps an error to its stable code.
pub(crate) fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<InputError>() {
        return e.code();
    }
    if let Some(e) = err.downcast_ref::<MixError>() {
        return match e {
            MixError::Io(_) => error_codes::FILE_IO,
            _ => e.code(),
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return error_codes::FILE_IO;
    }
    error_codes::OTHER
}

/// Prints a JSON envelope for `result` and returns the matching exit code.
pub(crate) fn emit_json<T: Serialize>(result: Result<T>) -> Result<ExitCode> {
    let (output, code) = match result {
        Ok(report) => (JsonOutput::success(report), ExitCode::SUCCESS),
        Err(err) => (
            JsonOutput::failure(vec![JsonError {
                code: error_code(&err).to_string(),
                message: format!("{:#}", err),
            }]),
            ExitCode::from(1),
        ),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Prints the banner for a mix command.
pub(crate) fn print_mix_header(command: &str, inputs: usize) {
    println!(
        "{} {} {}",
        "Mixing".cyan().bold(),
        inputs,
        format!("files ({})", command).cyan().bold()
    );
}

/// Prints the outcome of a mix.
pub(crate) fn print_mix_report(report: &MixReport) {
    for input in &report.inputs {
        println!("  {} {}", "input:".dimmed(), input);
    }
    println!(
        "  {} {} Hz, {} channel(s), {} frames",
        "format:".dimmed(),
        report.sample_rate,
        report.channels,
        report.frames
    );

    match report.cutoff_hz {
        Some(hz) => println!(
            "  {} Applied low-pass filter with cutoff frequency: {:.2} Hz",
            "->".green(),
            hz
        ),
        None => println!("  {} Low-pass filter skipped", "!!".yellow()),
    }

    if report.normalized {
        println!(
            "  {} Normalized loudness to the loudest peak: {}",
            "->".green(),
            report.loudest_peak
        );
    } else {
        println!(
            "  {} Skipping normalization due to zero or invalid peak amplitude.",
            "!!".yellow()
        );
    }

    println!("  {} {}", "pcm hash:".dimmed(), report.pcm_hash);
    println!(
        "{} Successfully mixed {} files into {}",
        "ok".green().bold(),
        report.inputs.len(),
        report.output
    );
}
