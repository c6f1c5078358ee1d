//! # Coffee Shop CLI
//!
//! Command-line tool for deployment environment configuration:
//! resolve a variant's record, check it against its invariants, or
//! scaffold a per-deployment override file.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
