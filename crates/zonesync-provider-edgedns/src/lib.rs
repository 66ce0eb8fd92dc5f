// # Edge DNS Provider
//
// This crate provides the Edge DNS (config-dns API) zone provider for zonesync.
//
// ## Layers
//
// - `transport`: request execution, signing hook, 30 second timeout
// - `client`: typed config-dns endpoints, status mapping, v1 zone file fallback
// - `wire`: recordset, zone and query payloads as the API spells them
// - `translate`: recordset ↔ canonical record conversion
// - `cache`: per-zone recordset cache, invalidated after apply
// - `provider`: `ZoneProvider` implementation (populate / apply)
//
// ## Behavior
//
// - One HTTP request per operation; no retries, no rollback
// - Zones missing on the provider are created before the first change
// - Contract id is discovered from the zone listing when not configured
// - Dry-run mode performs reads and logs every mutation instead of sending it
//
// ## Security Requirements
//
// - Credentials never reach this crate; requests are signed by a caller-supplied `RequestSigner`
// - Debug output of the transport never exposes the signer
//
// ## API Reference
//
// - config-dns v2: https://techdocs.akamai.com/edge-dns/reference/edge-dns-api

pub mod cache;
pub mod client;
pub mod provider;
pub mod translate;
pub mod transport;
pub mod wire;

pub use cache::ZoneStateCache;
pub use client::{ApiVersion, EdgeDnsClient};
pub use provider::{EdgeDnsProvider, EdgeDnsSettings};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, RequestSigner, Transport};
pub use wire::{Recordset, RecordsetQuery, ZoneConfig, ZoneListQuery};

use std::sync::Arc;
use zonesync_core::config::ProviderConfig;
use zonesync_core::traits::{ZoneProvider, ZoneProviderFactory};
use zonesync_core::{Error, ProviderRegistry, Result};

/// Name the provider registers under
pub const PROVIDER_NAME: &str = "edge_dns";

/// Factory for creating Edge DNS providers
pub struct EdgeDnsFactory {
    signer: Arc<dyn RequestSigner>,
}

impl EdgeDnsFactory {
    /// Create a factory whose providers sign requests with `signer`
    pub fn new(signer: Arc<dyn RequestSigner>) -> Self {
        Self { signer }
    }
}

impl std::fmt::Debug for EdgeDnsFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeDnsFactory")
            .field("signer", &"<REDACTED>")
            .finish()
    }
}

impl ZoneProviderFactory for EdgeDnsFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn ZoneProvider>> {
        match config {
            ProviderConfig::EdgeDns {
                host,
                contract_id,
                group_id,
                comment,
                dry_run,
            } => {
                if host.is_empty() {
                    return Err(Error::config("Edge DNS host is required"));
                }

                let transport = ReqwestTransport::new(self.signer.clone())?;
                let client = EdgeDnsClient::new(host, Arc::new(transport));
                let settings = EdgeDnsSettings {
                    contract_id: contract_id.clone(),
                    group_id: group_id.clone(),
                    comment: comment.clone(),
                    dry_run: *dry_run,
                };

                Ok(Box::new(EdgeDnsProvider::new(client, settings)))
            }
            _ => Err(Error::config(format!(
                "Invalid config for Edge DNS provider: {}",
                config.type_name()
            ))),
        }
    }
}

/// Register the Edge DNS provider with a registry
pub fn register(registry: &ProviderRegistry, signer: Arc<dyn RequestSigner>) {
    registry.register_provider(PROVIDER_NAME, Box::new(EdgeDnsFactory::new(signer)));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PassThrough;

    impl RequestSigner for PassThrough {
        fn sign(&self, request: reqwest::Request) -> Result<reqwest::Request> {
            Ok(request)
        }
    }

    #[test]
    fn test_factory_creation() {
        let factory = EdgeDnsFactory::new(Arc::new(PassThrough));
        let config = ProviderConfig::EdgeDns {
            host: "akab.test".to_string(),
            contract_id: Some("C-1".to_string()),
            group_id: None,
            comment: None,
            dry_run: false,
        };

        let provider = factory.create(&config).unwrap();
        assert_eq!(provider.provider_name(), "edge_dns");
        assert_eq!(provider.supported_types().len(), 11);
        assert!(!provider.supports_geo());
        assert!(!provider.supports_dynamic());
    }

    #[test]
    fn test_factory_missing_host() {
        let factory = EdgeDnsFactory::new(Arc::new(PassThrough));
        let config = ProviderConfig::edge_dns("");

        assert!(matches!(factory.create(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_factory_rejects_other_config() {
        let factory = EdgeDnsFactory::new(Arc::new(PassThrough));
        let config = ProviderConfig::Custom {
            factory: "other".to_string(),
            config: serde_json::json!({}),
        };

        assert!(matches!(factory.create(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_register() {
        let registry = ProviderRegistry::new();
        register(&registry, Arc::new(PassThrough));

        assert!(registry.has_provider("edge_dns"));
        let provider = registry
            .create_provider(&ProviderConfig::edge_dns("akab.test"))
            .unwrap();
        assert_eq!(provider.provider_name(), "edge_dns");
    }
}
