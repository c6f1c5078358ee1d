//! Deployment variant selector

use coffeeshop_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment/build variant a configuration record is registered for.
///
/// Requesting a name outside this set fails with
/// [`ConfigurationError::UnknownVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Local development build
    Development,

    /// Deployed production build
    Production,
}

impl Variant {
    /// All variants with a registered configuration record
    pub const ALL: [Variant; 2] = [Variant::Development, Variant::Production];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Development => "development",
            Variant::Production => "production",
        }
    }

    /// Per-variant configuration file probed when no override path is given
    pub fn config_file(&self) -> PathBuf {
        PathBuf::from(format!("coffeeshop.{}.toml", self.as_str()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| s.eq_ignore_ascii_case(variant.as_str()))
            .ok_or_else(|| ConfigurationError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registered_variants() {
        assert_eq!("development".parse::<Variant>().unwrap(), Variant::Development);
        assert_eq!("Production".parse::<Variant>().unwrap(), Variant::Production);
    }

    #[test]
    fn test_parse_unregistered_variant_fails() {
        let err = "staging".parse::<Variant>().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownVariant { ref name } if name == "staging"
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_config_file_names() {
        assert_eq!(
            Variant::Development.config_file(),
            PathBuf::from("coffeeshop.development.toml")
        );
    }
}
