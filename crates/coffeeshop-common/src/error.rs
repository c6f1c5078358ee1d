//! Error types shared across the coffee shop workspace

use thiserror::Error;

/// Errors raised while resolving deployment configuration.
///
/// All of these surface at load time; a successfully loaded record
/// never fails afterwards.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No configuration record is registered for the requested variant
    #[error("Unknown deployment variant: {name}")]
    UnknownVariant { name: String },

    /// Configuration sources could not be read or deserialized
    #[error("Configuration parse error: {details}")]
    ParseError { details: String },

    /// A required field resolved to an empty value
    #[error("Missing configuration value: {field}")]
    MissingValue { field: String },

    /// A field resolved to a value that fails validation
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigurationError {
    /// Get error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigurationError::UnknownVariant { .. } => "COFFEESHOP_CONFIG_UNKNOWN_VARIANT",
            ConfigurationError::ParseError { .. } => "COFFEESHOP_CONFIG_PARSE_ERROR",
            ConfigurationError::MissingValue { .. } => "COFFEESHOP_CONFIG_MISSING_VALUE",
            ConfigurationError::InvalidValue { .. } => "COFFEESHOP_CONFIG_INVALID_VALUE",
        }
    }
}
