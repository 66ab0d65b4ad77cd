//! Configuration types for record providers
//!
//! Configuration is supplied by the embedding application (deserialized
//! from whatever format it uses). The library reads no files or
//! environment variables itself.

use serde::{Deserialize, Serialize};

/// DNS provider configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// DNSimple provider
    Dnsimple {
        /// DNSimple API access token (account token)
        api_token: String,
        /// Use the DNSimple sandbox environment
        #[serde(default)]
        sandbox: bool,
        /// Explicit API base URL (overrides `sandbox`)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
        /// Per-request HTTP timeout in seconds
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_secs: Option<u64>,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl ProviderConfig {
    /// DNSimple configuration with defaults for everything but the token
    pub fn dnsimple(api_token: impl Into<String>) -> Self {
        ProviderConfig::Dnsimple {
            api_token: api_token.into(),
            sandbox: false,
            base_url: None,
            timeout_secs: None,
        }
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::Dnsimple {
                api_token,
                base_url,
                timeout_secs,
                ..
            } => {
                if api_token.is_empty() {
                    return Err(crate::Error::config("DNSimple API token cannot be empty"));
                }
                if base_url.as_deref().is_some_and(str::is_empty) {
                    return Err(crate::Error::config("DNSimple base URL cannot be empty"));
                }
                if *timeout_secs == Some(0) {
                    return Err(crate::Error::config("DNSimple timeout must be positive"));
                }
                Ok(())
            }
            ProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom provider config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            ProviderConfig::Dnsimple { .. } => "dnsimple",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

// Hides the API token
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::Dnsimple {
                sandbox,
                base_url,
                timeout_secs,
                ..
            } => f
                .debug_struct("Dnsimple")
                .field("api_token", &"<REDACTED>")
                .field("sandbox", sandbox)
                .field("base_url", base_url)
                .field("timeout_secs", timeout_secs)
                .finish(),
            ProviderConfig::Custom { factory, .. } => f
                .debug_struct("Custom")
                .field("factory", factory)
                .field("config", &"<opaque>")
                .finish(),
        }
    }
}
