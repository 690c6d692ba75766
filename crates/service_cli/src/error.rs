//! CLI error types

use adapter_loader::LoadError;
use interp_core::types::InterpolationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sample data could not be loaded
    #[error("Data error: {0}")]
    Load(#[from] LoadError),

    /// Fitting or evaluation failed
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the report failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV report serialisation failed
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report serialisation failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
