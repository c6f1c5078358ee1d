//! Command-line interface for the coffee shop environment tool

pub mod args;
pub mod commands;
pub mod handlers;

pub use args::Args;
pub use commands::Commands;
