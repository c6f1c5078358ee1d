use clap::Subcommand;
use coffeeshop_environment::Variant;
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and print the environment record for a variant
    Show {
        /// Deployment variant (development, production)
        variant: Variant,
    },

    /// Validate the resolved record and report derived endpoints
    Check {
        /// Deployment variant (development, production)
        variant: Variant,
    },

    /// Scaffold a per-deployment configuration file for a variant
    Generate {
        /// Deployment variant (development, production)
        variant: Variant,

        /// Destination path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
