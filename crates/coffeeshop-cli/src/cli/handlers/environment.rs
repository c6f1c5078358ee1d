//! Handlers for environment resolution commands

use crate::error::Result;
use coffeeshop_environment::{load, Environment, Variant};
use std::path::PathBuf;
use tracing::debug;

/// Resolve a variant and print the record as TOML or JSON
pub fn handle_show(variant: Variant, config: Option<PathBuf>, json: bool) -> Result<()> {
    let environment = load(variant, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&environment)?);
    } else {
        print!("{}", toml::to_string_pretty(&environment)?);
    }
    Ok(())
}

/// Resolve and validate a variant, reporting the endpoints derived from it
pub fn handle_check(variant: Variant, config: Option<PathBuf>) -> Result<()> {
    let environment = load(variant, config)?;
    debug!(%variant, "record resolved and validated");

    println!("{variant}: configuration OK");
    println!("  api server: {}", environment.api_server_url);
    println!("  issuer:     {}", environment.auth.issuer_url());
    println!("  jwks:       {}", environment.auth.jwks_url());
    println!("  login:      {}", environment.auth.login_url()?);
    println!("  callback:   {}", environment.auth.callback_url);
    Ok(())
}

/// Scaffold a per-deployment configuration file for a variant
pub fn handle_generate(variant: Variant, output: Option<PathBuf>) -> Result<()> {
    let rendered = Environment::generate_example(variant)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
