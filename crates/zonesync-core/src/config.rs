//! Configuration types for zone synchronization
//!
//! This module defines all configuration structures used throughout the workspace.

use serde::{Deserialize, Serialize};

/// Main sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// DNS provider configuration
    pub provider: ProviderConfig,

    /// Optional engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

impl SyncConfig {
    /// Create a new configuration for a provider, with default engine settings
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            engine: EngineConfig::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.provider.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

/// DNS provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Edge DNS (config-dns API)
    EdgeDns {
        /// API host, without scheme (e.g. "akab-xxxx.luna.akamaiapis.net")
        host: String,
        /// Contract used when creating zones; discovered when absent
        #[serde(default)]
        contract_id: Option<String>,
        /// Group id passed on zone creation and contract discovery
        #[serde(default)]
        group_id: Option<String>,
        /// Comment attached to zones created by the provider
        #[serde(default)]
        comment: Option<String>,
        /// Log mutating requests instead of sending them
        #[serde(default)]
        dry_run: bool,
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
    /// Edge DNS configuration with only a host set
    pub fn edge_dns(host: impl Into<String>) -> Self {
        ProviderConfig::EdgeDns {
            host: host.into(),
            contract_id: None,
            group_id: None,
            comment: None,
            dry_run: false,
        }
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::EdgeDns { host, .. } => {
                if host.is_empty() {
                    return Err(crate::Error::config("Edge DNS host cannot be empty"));
                }
                if host.contains("://") || host.contains('/') {
                    return Err(crate::Error::config(format!(
                        "Edge DNS host must be a bare hostname, got '{}'",
                        host
                    )));
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
            ProviderConfig::EdgeDns { .. } => "edge_dns",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Skip provider records that cannot be translated instead of failing
    #[serde(default)]
    pub lenient: bool,

    /// Capacity of the engine event channel
    ///
    /// When full, new events are dropped (with a warning log).
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl EngineConfig {
    /// Validate the engine configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.event_channel_capacity == 0 {
            return Err(crate::Error::config("Event channel capacity must be > 0"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lenient: false,
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}

fn default_event_channel_capacity() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_dns_config_from_json() {
        let json = serde_json::json!({
            "provider": {
                "type": "edge_dns",
                "host": "akab-test.luna.akamaiapis.net",
                "group_id": "12345"
            }
        });

        let config: SyncConfig = serde_json::from_value(json).unwrap();
        config.validate().unwrap();

        match &config.provider {
            ProviderConfig::EdgeDns {
                contract_id,
                group_id,
                dry_run,
                ..
            } => {
                assert!(contract_id.is_none());
                assert_eq!(group_id.as_deref(), Some("12345"));
                assert!(!dry_run);
            }
            other => panic!("unexpected provider config: {:?}", other),
        }
        assert_eq!(config.provider.type_name(), "edge_dns");
        assert!(!config.engine.lenient);
        assert_eq!(config.engine.event_channel_capacity, 100);
    }

    #[test]
    fn test_host_validation() {
        assert!(ProviderConfig::edge_dns("").validate().is_err());
        assert!(ProviderConfig::edge_dns("https://host.example").validate().is_err());
        assert!(ProviderConfig::edge_dns("host.example").validate().is_ok());
    }

    #[test]
    fn test_custom_provider_validation() {
        let config = ProviderConfig::Custom {
            factory: "".to_string(),
            config: serde_json::json!({}),
        };
        assert!(config.validate().is_err());

        let config = ProviderConfig::Custom {
            factory: "bind".to_string(),
            config: serde_json::Value::Null,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_event_capacity_rejected() {
        let mut config = SyncConfig::new(ProviderConfig::edge_dns("host.example"));
        config.engine.event_channel_capacity = 0;
        assert!(config.validate().is_err());
    }
}
