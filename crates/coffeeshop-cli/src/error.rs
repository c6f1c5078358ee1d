//! Error types for the coffee shop CLI

use color_eyre::eyre::Report;
use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration resolution issues
    #[error("Configuration error")]
    Config(#[from] coffeeshop_common::ConfigurationError),

    /// JSON output rendering issues
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    /// TOML output rendering issues
    #[error("Serialization error")]
    Render(#[from] toml::ser::Error),

    /// Filesystem issues
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Everything else (using color-eyre's Report for rich errors)
    #[error(transparent)]
    Internal(#[from] Report),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
