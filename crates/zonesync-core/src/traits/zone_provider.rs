// # Zone Provider Trait
//
// Defines the interface a DNS provider exposes to the zone-sync orchestrator.
//
// ## Implementations
//
// - Edge DNS (config-dns v2/v1): `zonesync-provider-edgedns` crate
//
// ## Usage
//
// ```rust,ignore
// use zonesync_core::{Zone, ZoneProvider};
//
// async fn existing(provider: &mut dyn ZoneProvider) -> zonesync_core::Result<Zone> {
//     let mut zone = Zone::new("example.com.")?;
//     let existed = provider.populate(&mut zone, false).await?;
//     tracing::info!("zone existed: {}", existed);
//     Ok(zone)
// }
// ```

use async_trait::async_trait;

use crate::plan::Plan;
use crate::record::RecordType;
use crate::zone::Zone;

/// Trait for DNS provider implementations
///
/// A provider reads the records of a zone into the canonical model and
/// applies externally planned changes to reach a desired state.
///
/// # Exclusive Access
///
/// `populate` and `apply` take `&mut self`: a provider may cache per-zone
/// state between the two, and callers serving several zones concurrently
/// must give each task its own provider or serialize access themselves.
///
/// # Retries
///
/// Providers do not retry failed API calls. A failed change aborts the
/// apply and is returned to the caller; changes already applied stay applied.
#[async_trait]
pub trait ZoneProvider: Send {
    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;

    /// Whether geo-aware records are supported
    fn supports_geo(&self) -> bool;

    /// Whether dynamic (health-checked) records are supported
    fn supports_dynamic(&self) -> bool;

    /// Record types this provider can read and write
    fn supported_types(&self) -> &'static [RecordType];

    /// Check if this provider supports the given record type
    fn supports(&self, record_type: RecordType) -> bool {
        self.supported_types().contains(&record_type)
    }

    /// Load the provider's records for `zone` into it
    ///
    /// Records of unsupported types are skipped. With `lenient`, records the
    /// provider cannot translate are skipped instead of failing the call.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The zone exists on the provider
    /// - `Ok(false)`: The zone could not be read and was treated as empty
    /// - `Err(Error)`: A record could not be translated (non-lenient)
    async fn populate(&mut self, zone: &mut Zone, lenient: bool) -> Result<bool, crate::Error>;

    /// Apply a plan, creating the zone first if the provider lacks it
    ///
    /// Changes are applied strictly in plan order. The first failure aborts
    /// the remaining changes and is returned as `Error::Apply`.
    async fn apply(&mut self, plan: &Plan) -> Result<(), crate::Error>;
}

/// Helper trait for constructing zone providers from configuration
pub trait ZoneProviderFactory: Send + Sync {
    /// Create a ZoneProvider instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Configuration specific to this provider
    ///
    /// # Returns
    ///
    /// A boxed ZoneProvider trait object
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn ZoneProvider>, crate::Error>;
}
