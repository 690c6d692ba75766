//! Newton CLI - Polynomial Interpolation from the Command Line
//!
//! Fits the minimal-degree polynomial through the points of a data file and
//! evaluates it.
//!
//! # Commands
//!
//! - `newton eval 2018` - Evaluate the polynomial at one or more values
//! - `newton table --start 2008 --end 2018` - Evaluate over a stepped range
//! - `newton coeffs` - List the divided-difference coefficients
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires the data adapter
//! (`adapter_loader`) to the numeric kernel (`interp_core`) and renders the
//! results through a report sink.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs as ConfigCliArgs};

/// Newton divided-difference interpolation CLI
#[derive(Parser)]
#[command(name = "newton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Data file of whitespace-separated x y pairs
    #[arg(short, long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Decimals printed for evaluated values
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the interpolating polynomial at the given values
    Eval {
        /// Query values
        #[arg(required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },

    /// Evaluate over the half-open range [start, end)
    Table {
        /// First query value
        #[arg(short, long, allow_negative_numbers = true)]
        start: f64,

        /// Range end (exclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        end: f64,

        /// Distance between query values
        #[arg(long, default_value = "1")]
        step: f64,
    },

    /// List the divided-difference coefficients
    Coeffs,
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            data_path: cli.data.clone(),
            format: cli.format.clone(),
            precision: cli.precision,
            log_level: if cli.verbose {
                Some("debug".to_string())
            } else {
                cli.log_level.clone()
            },
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        data = %config.data_path.display(),
        format = ?config.format,
        precision = config.precision,
        "Configuration loaded"
    );

    let report = match cli.command {
        Commands::Eval { x } => commands::eval::run(&config, &x)?,
        Commands::Table { start, end, step } => commands::table::run(&config, start, end, step)?,
        Commands::Coeffs => commands::coeffs::run(&config)?,
    };

    let stdout = std::io::stdout();
    report::sink_for(config.format, config.precision, stdout.lock()).write(&report)
}

/// Write the error of a failed run as a single line
fn report_failure<W: std::io::Write>(err: &CliError, mut out: W) {
    use std::io::Write;
    let _ = writeln!(out, "Error: {}", err);
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
