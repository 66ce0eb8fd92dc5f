//! Plugin-based provider registry
//!
//! The registry allows zone providers to be registered dynamically at
//! runtime, avoiding hardcoded if-else chains.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonesync_core::registry::ProviderRegistry;
//! use zonesync_core::config::ProviderConfig;
//!
//! let registry = ProviderRegistry::new();
//! zonesync_provider_edgedns::register(&registry, signer);
//!
//! let provider = registry.create_provider(&ProviderConfig::edge_dns("akab-xxxx.luna.akamaiapis.net"))?;
//! ```

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::traits::{ZoneProvider, ZoneProviderFactory};
use std::collections::HashMap;
use std::sync::RwLock;

/// Provider registry for plugin-based zone provider creation
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
    /// Registered zone provider factories
    providers: RwLock<HashMap<String, Box<dyn ZoneProviderFactory>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone provider factory
    ///
    /// # Parameters
    ///
    /// - `name`: Provider type name, matching [`ProviderConfig::type_name`]
    /// - `factory`: Factory object for creating provider instances
    pub fn register_provider(&self, name: impl Into<String>, factory: Box<dyn ZoneProviderFactory>) {
        let name = name.into();
        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        providers.insert(name, factory);
    }

    /// Create a zone provider from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn ZoneProvider>)`: Created provider instance
    /// - `Err(Error)`: If the config is invalid, the provider type is not
    ///   registered, or creation fails
    pub fn create_provider(&self, config: &ProviderConfig) -> Result<Box<dyn ZoneProvider>> {
        config.validate()?;

        let provider_type = config.type_name();
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let factory = providers
            .get(provider_type)
            .ok_or_else(|| Error::config(format!("Unknown provider type: {}", provider_type)))?;

        factory.create(config)
    }

    /// List all registered provider types
    pub fn list_providers(&self) -> Vec<String> {
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        providers.keys().cloned().collect()
    }

    /// Check if a provider type is registered
    pub fn has_provider(&self, name: &str) -> bool {
        let providers = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        providers.contains_key(name)
    }
}
