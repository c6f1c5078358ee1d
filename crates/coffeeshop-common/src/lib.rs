//! # Coffee Shop Common
//!
//! Shared building blocks for the coffee shop workspace: configuration
//! error types and the logging bootstrap used by every binary.

pub mod error;
pub mod logging;

pub use error::ConfigurationError;
