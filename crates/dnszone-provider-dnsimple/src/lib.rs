// # DNSimple Record Provider
//
// This crate maps the generic dnszone record operations onto the DNSimple
// API v2.
//
// ## Behaviour
//
// - ✅ One HTTP request per record (plus one identity lookup per operation)
// - ✅ Records processed sequentially, in input order
// - ✅ Partial results returned with the error when a batch fails midway
// - ✅ Identity failures reported as errors, never a process exit
// - ✅ HTTP timeout configured (30 seconds by default)
// - ✅ Specific error handling for HTTP status codes (401, 403, 404, 429, 5xx)
// - ❌ NO retry or backoff logic (left to the embedding application)
// - ❌ NO rate limiting
// - ❌ NO caching of records or of the account identity
// - ❌ NO pagination (listing reads the first page only)
//
// ## Security Requirements
//
// - API token NEVER appears in logs or Debug output
// - API token is supplied by the embedding application
//
// ## Layout
//
// - `client`: [`RegistrarClient`] contract and the reqwest [`DnsimpleClient`]
// - `provider`: [`DnsimpleProvider`], the adapter implementing the
//   dnszone capability traits
// - `types`: DNSimple wire types

pub mod client;
pub mod provider;
pub mod types;

pub use client::{
    DEFAULT_HTTP_TIMEOUT, DNSIMPLE_API_BASE, DNSIMPLE_SANDBOX_API_BASE, DnsimpleClient,
    RegistrarClient,
};
pub use provider::{DnsimpleProvider, parse_record_id, to_record, to_request};
pub use types::{AccountId, ZoneRecord, ZoneRecordRequest};

use dnszone_core::config::ProviderConfig;
use dnszone_core::traits::{RecordProvider, RecordProviderFactory};
use dnszone_core::{Error, Result};
use std::time::Duration;

/// Factory for creating DNSimple providers
pub struct DnsimpleFactory;

impl RecordProviderFactory for DnsimpleFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn RecordProvider>> {
        match config {
            ProviderConfig::Dnsimple {
                api_token,
                sandbox,
                base_url,
                timeout_secs,
            } => {
                if api_token.is_empty() {
                    return Err(Error::config("DNSimple API token is required"));
                }

                let base_url = match (base_url.as_deref(), *sandbox) {
                    (Some(url), _) => url,
                    (None, true) => DNSIMPLE_SANDBOX_API_BASE,
                    (None, false) => DNSIMPLE_API_BASE,
                };
                let timeout = timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_HTTP_TIMEOUT);

                if *sandbox {
                    tracing::warn!("DNSimple provider using the sandbox environment");
                }

                let client = DnsimpleClient::with_base_url(api_token.clone(), base_url, timeout);
                Ok(Box::new(DnsimpleProvider::with_client(client)))
            }
            _ => Err(Error::config("Invalid config for DNSimple provider")),
        }
    }
}

/// Register the DNSimple provider with a registry
///
/// # Example
///
/// ```rust
/// use dnszone_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// dnszone_provider_dnsimple::register(&registry);
/// assert!(registry.has_provider("dnsimple"));
/// ```
pub fn register(registry: &dnszone_core::ProviderRegistry) {
    registry.register_provider("dnsimple", Box::new(DnsimpleFactory));
}
