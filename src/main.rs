//! rootfft CLI - evaluate a polynomial at the n-th roots of unity, or recover
//! it from such values
//!
//! # Examples
//!
//! ```bash
//! # x³ - x² + x - 1 at the 4th roots of unity (highest degree first)
//! rootfft evaluate 1 -1 1 -1
//!
//! # back to coefficients
//! rootfft interpolate 0 0 -4 0
//!
//! # polar output, 4 decimals
//! rootfft --polar --precision 4 evaluate 1 2 3
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rootfft::complex::{parse_all, parse_descending};
use rootfft::format::{format_polynomial, format_values};
use rootfft::{DisplayOptions, evaluate, interpolate};

#[derive(Parser)]
#[command(name = "rootfft")]
#[command(
    about = "The fast fourier transform (FFT) applied to polynomial evaluation and interpolation",
    long_about = None
)]
struct Cli {
    /// Also print the input in rendered form
    #[arg(long, global = true)]
    verbose: bool,

    /// Show points in polar format
    #[arg(long, global = true)]
    polar: bool,

    /// Decimal places for values that are not exact
    #[arg(long, global = true, default_value_t = 2)]
    precision: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// FFT: evaluate a polynomial of degree N (given as a list of coefficients)
    /// when x is set to each of the Nth roots of unity
    Evaluate {
        /// Coefficients, starting with the x^N term and ending with the constant
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        coefficients: Vec<String>,
    },

    /// inverse FFT: calculate the coefficients of a polynomial of degree N given
    /// its values at each of the Nth roots of unity
    Interpolate {
        /// Values at ω⁰ = 1, ω¹, ω², ... (count must be a power of 2)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = DisplayOptions {
        polar: cli.polar,
        precision: cli.precision,
    };

    match cli.command {
        Commands::Evaluate { coefficients } => {
            let coefficients = parse_descending(coefficients.as_slice())
                .context("failed to parse coefficients")?;

            if cli.verbose {
                println!(
                    "evaluating polynomial: {}",
                    format_polynomial(&coefficients, &options)
                );
                println!("points:");
            }
            let values = evaluate(&coefficients).context("evaluation failed")?;
            for line in format_values(&values, &options) {
                println!("{line}");
            }
        }

        Commands::Interpolate { values } => {
            let values = parse_all(values.as_slice()).context("failed to parse values")?;

            if cli.verbose {
                println!("interpolating points:");
                for line in format_values(&values, &options) {
                    println!("{line}");
                }
                print!("polynomial: ");
            }
            let coefficients = interpolate(&values).context("interpolation failed")?;
            println!("{}", format_polynomial(&coefficients, &options));
        }
    }

    Ok(())
}
