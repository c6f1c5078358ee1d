//! Command handlers for the coffee shop CLI

pub mod environment;
