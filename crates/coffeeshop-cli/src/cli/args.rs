use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use std::path::PathBuf;

/// Coffee Shop CLI - deployment environment configuration
#[derive(Parser, Debug)]
#[command(
    name = "coffeeshop",
    version,
    about = "Resolve and check coffee shop deployment environments",
    long_about = "Deployment environment tool for the coffee shop application.

USAGE:
  coffeeshop show development          # Print the resolved record
  coffeeshop check production          # Validate and report derived endpoints
  coffeeshop generate production       # Scaffold a per-deployment TOML file

Records resolve from registered defaults, then coffeeshop.<variant>.toml
(or --config <path>), then COFFEESHOP_* environment variables."
)]
pub struct Args {
    /// Configuration file overriding the per-variant default path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Show { variant } => {
                handlers::environment::handle_show(variant, self.config, self.json)
            }
            Commands::Check { variant } => handlers::environment::handle_check(variant, self.config),
            Commands::Generate { variant, output } => {
                handlers::environment::handle_generate(variant, output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeeshop_environment::Variant;

    #[test]
    fn test_parse_show_with_variant() {
        let args = Args::try_parse_from(["coffeeshop", "show", "development"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Show {
                variant: Variant::Development
            }
        ));
        assert!(!args.json);
    }

    #[test]
    fn test_parse_global_flags() {
        let args = Args::try_parse_from([
            "coffeeshop",
            "show",
            "production",
            "--json",
            "--config",
            "deploy.toml",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("deploy.toml")));
    }

    #[test]
    fn test_unknown_variant_is_a_parse_error() {
        assert!(Args::try_parse_from(["coffeeshop", "check", "staging"]).is_err());
    }
}
