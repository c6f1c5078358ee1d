//! Deployment environment record for the coffee shop application

use coffeeshop_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::variant::Variant;

/// Auth0 settings for the registered public client.
///
/// These identify the tenant and client application; none of them is
/// secret material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Auth0 tenant/domain prefix (e.g. "coffee-shop-conjohn712.us")
    pub domain_prefix: String,

    /// Audience set for the Auth0 application
    pub audience: String,

    /// Client ID generated for the Auth0 application
    pub client_id: String,

    /// Base URL of the running application, used as the post-login redirect target
    pub callback_url: String,
}

impl AuthSettings {
    /// Full Auth0 tenant domain
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.domain_prefix)
    }

    /// Token issuer URL for the tenant
    pub fn issuer_url(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// JWKS endpoint publishing the tenant signing keys
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Login link the front end presents to start an authorization flow
    pub fn login_url(&self) -> Result<Url, ConfigurationError> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.domain())).map_err(|e| {
            ConfigurationError::InvalidValue {
                field: "auth.domain_prefix".to_string(),
                reason: e.to_string(),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }
}

/// Complete configuration record for one deployment variant.
///
/// Constructed once at load time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Whether the running build is a production build
    pub production: bool,

    /// Base address of the backend API server
    pub api_server_url: String,

    /// Identity-provider settings for the public client
    pub auth: AuthSettings,
}

impl Environment {
    /// The configuration record registered for a variant.
    ///
    /// Production values are placeholders and are expected to be replaced
    /// per deployment via the TOML file or `COFFEESHOP_*` environment
    /// variables.
    pub fn defaults(variant: Variant) -> Self {
        match variant {
            Variant::Development => Self {
                production: false,
                api_server_url: "http://localhost:5000".to_string(),
                auth: AuthSettings {
                    domain_prefix: "coffee-shop-conjohn712.us".to_string(),
                    audience: "coffee".to_string(),
                    client_id: "wEeSH2pJ1rNB8Qya4yJDzWpVdt6qz2i5".to_string(),
                    callback_url: "http://localhost:4200".to_string(),
                },
            },
            Variant::Production => Self {
                production: true,
                api_server_url: "https://coffee-shop-api.example.com".to_string(),
                auth: AuthSettings {
                    domain_prefix: "coffee-shop-conjohn712.us".to_string(),
                    audience: "coffee".to_string(),
                    client_id: "wEeSH2pJ1rNB8Qya4yJDzWpVdt6qz2i5".to_string(),
                    callback_url: "https://coffee-shop.example.com".to_string(),
                },
            },
        }
    }

    /// Check the invariants every usable record must hold.
    ///
    /// Runs at load time so a broken deployment fails before first use.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_non_empty("api_server_url", &self.api_server_url)?;
        require_non_empty("auth.domain_prefix", &self.auth.domain_prefix)?;
        require_non_empty("auth.audience", &self.auth.audience)?;
        require_non_empty("auth.client_id", &self.auth.client_id)?;
        require_non_empty("auth.callback_url", &self.auth.callback_url)?;

        require_absolute_url("api_server_url", &self.api_server_url)?;
        require_absolute_url("auth.callback_url", &self.auth.callback_url)?;

        Ok(())
    }

    /// Generate example per-variant configuration file
    pub fn generate_example(variant: Variant) -> Result<String, ConfigurationError> {
        let environment = Self::defaults(variant);
        toml::to_string_pretty(&environment).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize example config: {e}"),
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::MissingValue {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn require_absolute_url(field: &str, value: &str) -> Result<Url, ConfigurationError> {
    let url = Url::parse(value).map_err(|e| ConfigurationError::InvalidValue {
        field: field.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigurationError::InvalidValue {
            field: field.to_string(),
            reason: format!("unsupported URL scheme: {other}"),
        }),
    }
}
