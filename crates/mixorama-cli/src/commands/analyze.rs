//! Analyze command implementation
//!
//! Reports the format, peak amplitude and a per-channel zero-crossing
//! frequency estimate of a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use mixorama_dsp::wav::deinterleave;
use mixorama_dsp::{highest_frequency_estimate, peak_amplitude, zero_crossings};

use super::pipeline::load_input;
use super::report::{AnalyzeReport, ChannelStats};
use super::reporting::emit_json;

/// Run the analyze command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &Path, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return emit_json(analyze(input));
    }

    let report = analyze(input)?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

/// Loads `input` and measures it.
pub fn analyze(input: &Path) -> Result<AnalyzeReport> {
    let data = load_input(input)?;

    let channel_stats = deinterleave(&data.samples, data.channels)
        .iter()
        .enumerate()
        .map(|(channel, samples)| ChannelStats {
            channel,
            peak_amplitude: peak_amplitude(samples),
            zero_crossings: zero_crossings(samples),
            frequency_estimate_hz: highest_frequency_estimate(samples, data.sample_rate),
        })
        .collect();

    Ok(AnalyzeReport {
        input: input.display().to_string(),
        sample_rate: data.sample_rate,
        channels: data.channels,
        frames: data.frames(),
        duration_seconds: data.duration_seconds(),
        peak_amplitude: peak_amplitude(&data.samples),
        channel_stats,
    })
}

fn print_report(report: &AnalyzeReport) {
    println!("{} {}", "Analyzing".cyan().bold(), report.input);
    println!("  {} {} Hz", "sample rate:".dimmed(), report.sample_rate);
    println!("  {} {}", "channels:".dimmed(), report.channels);
    println!(
        "  {} {} ({:.3} s)",
        "frames:".dimmed(),
        report.frames,
        report.duration_seconds
    );
    println!("  {} {}", "peak:".dimmed(), report.peak_amplitude);

    for stats in &report.channel_stats {
        println!(
            "  {} peak {}, {} zero crossings, ~{:.2} Hz",
            format!("channel {}:", stats.channel).dimmed(),
            stats.peak_amplitude,
            stats.zero_crossings,
            stats.frequency_estimate_hz
        );
    }
    println!(
        "  {}",
        "Frequency is a zero-crossing estimate, not a spectral measurement.".dimmed()
    );
}
