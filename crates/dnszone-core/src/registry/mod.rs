//! Plugin-based provider registry
//!
//! The registry allows record providers to be registered dynamically at
//! runtime, so an embedding application can pick one from configuration
//! without hardcoded if-else chains.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dnszone_core::{ProviderConfig, ProviderRegistry};
//!
//! let registry = ProviderRegistry::new();
//! dnszone_provider_dnsimple::register(&registry);
//!
//! let provider = registry.create_provider(&ProviderConfig::dnsimple(token))?;
//! ```

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::traits::{RecordProvider, RecordProviderFactory};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Provider registry for plugin-based record provider creation
///
/// The registry maintains a map of provider type names to factory objects,
/// allowing dynamic instantiation of providers based on configuration.
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Registered record provider factories
    providers: RwLock<HashMap<String, Box<dyn RecordProviderFactory>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record provider factory
    ///
    /// Registering the same name twice replaces the earlier factory.
    pub fn register_provider(
        &self,
        name: impl Into<String>,
        factory: Box<dyn RecordProviderFactory>,
    ) {
        let name = name.into();
        tracing::debug!("Registering record provider factory: {}", name);
        let mut providers = self.providers.write().unwrap_or_else(PoisonError::into_inner);
        providers.insert(name, factory);
    }

    /// Create a record provider from configuration
    ///
    /// The configuration is validated before the factory is invoked.
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn RecordProvider>)`: Created provider instance
    /// - `Err(Error)`: If the configuration is invalid, the provider type is
    ///   not registered, or creation fails
    pub fn create_provider(&self, config: &ProviderConfig) -> Result<Box<dyn RecordProvider>> {
        config.validate()?;

        let provider_type = config.type_name();
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);

        let factory = providers
            .get(provider_type)
            .ok_or_else(|| Error::config(format!("Unknown provider type: {}", provider_type)))?;

        factory.create(config)
    }

    /// List all registered provider types
    pub fn list_providers(&self) -> Vec<String> {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        providers.keys().cloned().collect()
    }

    /// Check if a provider type is registered
    pub fn has_provider(&self, name: &str) -> bool {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        providers.contains_key(name)
    }
}
