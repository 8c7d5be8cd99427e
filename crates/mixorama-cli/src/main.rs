//! Mixorama CLI - mix WAV files together
//!
//! This binary mixes two or more WAV files into one using linear, RMS or
//! weighted mixing, then smooths and normalizes the result.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use mixorama_cli::commands;
use mixorama_cli::commands::linear::{LinearOptions, DEFAULT_CUTOFF_HZ};
use mixorama_cli::commands::rms::RmsOptions;
use mixorama_cli::commands::weighted::WeightedOptions;

/// Mixorama - mix WAV files with saturating 16-bit arithmetic
#[derive(Parser)]
#[command(name = "mixorama")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average inputs pairwise, low-pass filter at a fixed cutoff, normalize
    Linear {
        /// Input WAV files (at least two)
        #[arg(required = true, num_args = 2..)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = commands::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Low-pass cutoff frequency in Hz
        #[arg(long, default_value_t = DEFAULT_CUTOFF_HZ)]
        cutoff: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// RMS-mix inputs pairwise, low-pass filter at the highest estimated frequency, normalize
    Rms {
        /// Input WAV files (at least two)
        #[arg(required = true, num_args = 2..)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = commands::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Mix all inputs at once with one weight per input, normalize
    Weighted {
        /// Input WAV files
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Weight for each input, in input order (repeat or comma-separate)
        #[arg(
            short,
            long = "weight",
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        weights: Vec<f64>,

        /// Output file
        #[arg(short, long, default_value = commands::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Optional low-pass cutoff frequency in Hz
        #[arg(long)]
        cutoff: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print format, peak amplitude and frequency estimate of a WAV file
    Analyze {
        /// Input WAV file
        input: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Linear {
            inputs,
            output,
            cutoff,
            json,
        } => commands::linear::run(
            &LinearOptions {
                inputs,
                output,
                cutoff_hz: cutoff,
            },
            json,
        ),
        Commands::Rms {
            inputs,
            output,
            json,
        } => commands::rms::run(&RmsOptions { inputs, output }, json),
        Commands::Weighted {
            inputs,
            weights,
            output,
            cutoff,
            json,
        } => commands::weighted::run(
            &WeightedOptions {
                inputs,
                weights,
                output,
                cutoff_hz: cutoff,
            },
            json,
        ),
        Commands::Analyze { input, json } => commands::analyze::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
