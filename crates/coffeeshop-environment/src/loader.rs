//! Variant-keyed resolution of the deployment environment

use coffeeshop_common::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing::debug;

use crate::environment::Environment;
use crate::variant::Variant;

/// Prefix for environment-variable overrides; nested fields split on `__`
/// (e.g. `COFFEESHOP_AUTH__CLIENT_ID`).
pub const ENV_PREFIX: &str = "COFFEESHOP_";

static ACTIVE: OnceCell<Environment> = OnceCell::new();

/// Resolve the configuration record registered for `variant`.
///
/// Sources merge in priority order: registered defaults, then the
/// per-variant TOML file (or `path_override` when given), then
/// `COFFEESHOP_*` environment variables. The resolved record is validated
/// before it is returned.
pub fn load(
    variant: Variant,
    path_override: Option<PathBuf>,
) -> Result<Environment, ConfigurationError> {
    let mut figment = Figment::from(Serialized::defaults(Environment::defaults(variant)));

    match path_override {
        Some(path) => {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }
        None => {
            let default_path = variant.config_file();
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
            }
        }
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let environment: Environment =
        figment
            .extract()
            .map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;

    environment.validate()?;
    debug!(%variant, "resolved deployment environment");
    Ok(environment)
}

/// Resolve and publish the process-wide environment record.
///
/// The first successful call wins; every later call returns the record
/// already published, so repeated reads observe identical values.
pub fn init(
    variant: Variant,
    path_override: Option<PathBuf>,
) -> Result<&'static Environment, ConfigurationError> {
    ACTIVE.get_or_try_init(|| load(variant, path_override))
}

/// The published process-wide record, if [`init`] has run
pub fn active() -> Option<&'static Environment> {
    ACTIVE.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults_without_overrides() {
        Jail::expect_with(|_jail| {
            let environment = load(Variant::Development, None).unwrap();
            assert_eq!(environment, Environment::defaults(Variant::Development));
            Ok(())
        });
    }

    #[test]
    fn test_per_variant_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "coffeeshop.development.toml",
                r#"
                    api_server_url = "http://localhost:8080"

                    [auth]
                    audience = "espresso"
                "#,
            )?;

            let environment = load(Variant::Development, None).unwrap();
            assert_eq!(environment.api_server_url, "http://localhost:8080");
            assert_eq!(environment.auth.audience, "espresso");
            // Untouched fields keep their registered values
            assert_eq!(
                environment.auth.client_id,
                "wEeSH2pJ1rNB8Qya4yJDzWpVdt6qz2i5"
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_vars_override_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "coffeeshop.development.toml",
                r#"api_server_url = "http://localhost:8080""#,
            )?;
            jail.set_env("COFFEESHOP_API_SERVER_URL", "http://localhost:9000");
            jail.set_env("COFFEESHOP_AUTH__CLIENT_ID", "overridden-client");

            let environment = load(Variant::Development, None).unwrap();
            assert_eq!(environment.api_server_url, "http://localhost:9000");
            assert_eq!(environment.auth.client_id, "overridden-client");
            Ok(())
        });
    }

    #[test]
    fn test_path_override_wins_over_variant_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "coffeeshop.development.toml",
                r#"api_server_url = "http://localhost:8080""#,
            )?;
            jail.create_file(
                "override.toml",
                r#"api_server_url = "http://localhost:7000""#,
            )?;

            let environment =
                load(Variant::Development, Some(PathBuf::from("override.toml"))).unwrap();
            assert_eq!(environment.api_server_url, "http://localhost:7000");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_override_fails_at_load() {
        Jail::expect_with(|jail| {
            jail.set_env("COFFEESHOP_API_SERVER_URL", "not a url");

            let err = load(Variant::Development, None).unwrap_err();
            assert!(matches!(
                err,
                ConfigurationError::InvalidValue { ref field, .. } if field == "api_server_url"
            ));
            Ok(())
        });
    }

    #[test]
    fn test_emptied_field_fails_at_load() {
        Jail::expect_with(|jail| {
            jail.set_env("COFFEESHOP_AUTH__AUDIENCE", "");

            let err = load(Variant::Development, None).unwrap_err();
            assert!(matches!(
                err,
                ConfigurationError::MissingValue { ref field } if field == "auth.audience"
            ));
            Ok(())
        });
    }
}
