//! Main entry point for the coffee shop CLI

use clap::Parser;
use coffeeshop_cli::cli::Args;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure color-eyre without location/env sections
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Quiet by default; enabled via -v flags or RUST_LOG
    coffeeshop_common::logging::init_cli_logging(&args.verbosity, "coffeeshop=info")
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(args.run()?)
}
