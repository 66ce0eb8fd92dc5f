//! Edge DNS zone provider
//!
//! Reads zones through the recordset listing and reconciles them one change
//! at a time.
//!
//! ## Apply sequence
//!
//! ```text
//! START → ZONE_CHECK ─┬─ exists ───────────────────────────┐
//!                     └─ missing → CONTRACT → ZONE_CREATE ─┤
//!                                                          ▼
//!                              APPLY_CHANGES[0..n] → CACHE_INVALIDATE → DONE
//! ```
//!
//! Any failing step ends the apply with `Error::Apply`. Nothing is retried
//! and changes applied before the failure are not rolled back.

use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use zonesync_core::{
    ApplyStage, Change, ChangeKind, Error, Plan, RecordType, Result, Zone, ZoneProvider,
};

use crate::cache::ZoneStateCache;
use crate::client::EdgeDnsClient;
use crate::translate::{qualify, relativize, to_record, to_recordset};
use crate::wire::{Recordset, ZoneConfig, ZoneListQuery};

/// Provider settings that are not part of the HTTP client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeDnsSettings {
    /// Contract for new zones; filled in by contract discovery when absent
    pub contract_id: Option<String>,
    /// Group for new zones and contract discovery
    pub group_id: Option<String>,
    /// Comment attached to created zones
    pub comment: Option<String>,
    /// Log mutating requests instead of sending them
    pub dry_run: bool,
}

/// Zone provider for the config-dns API
///
/// # Dry-Run Mode
///
/// When `dry_run` is set, the provider will:
/// - Perform all GET requests (zone check, recordset listing, contract discovery)
/// - Log the intended zone creation and record payloads
/// - **NOT** send any POST, PUT or DELETE
#[derive(Debug)]
pub struct EdgeDnsProvider {
    client: EdgeDnsClient,
    cache: ZoneStateCache,
    settings: EdgeDnsSettings,
}

impl EdgeDnsProvider {
    /// Create a provider around an API client
    pub fn new(client: EdgeDnsClient, settings: EdgeDnsSettings) -> Self {
        if settings.dry_run {
            warn!("Edge DNS provider running in DRY-RUN mode - no changes will be made");
        }

        Self {
            client,
            cache: ZoneStateCache::new(),
            settings,
        }
    }

    /// Current settings, including a discovered contract id
    pub fn settings(&self) -> &EdgeDnsSettings {
        &self.settings
    }

    /// The underlying API client
    pub fn client(&self) -> &EdgeDnsClient {
        &self.client
    }

    /// Raw recordsets for `zone`, from the cache or the API
    ///
    /// Read failures yield an empty slice.
    pub async fn zone_records(&mut self, zone: &Zone) -> &[Recordset] {
        self.cache.records(&self.client, zone.name()).await
    }

    /// Master zone file of `zone`, with the v1 fallback
    pub async fn master_zone_file(&self, zone: &Zone) -> Result<String> {
        self.client.get_master_zone_file(zone.unqualified_name()).await
    }

    /// Contract id used for zone creation
    ///
    /// Uses the configured id when present. Otherwise the zones visible to
    /// the configured group are listed and the first zone's contract is
    /// adopted for the rest of the provider's lifetime.
    pub async fn resolve_contract_id(&mut self) -> Result<String> {
        if let Some(ref contract_id) = self.settings.contract_id {
            return Ok(contract_id.clone());
        }

        let query = ZoneListQuery {
            group_id: self.settings.group_id.clone(),
            ..ZoneListQuery::default()
        };
        let listing = self
            .client
            .list_zones(&query)
            .await
            .map_err(|e| Error::contract_resolution(format!("unable to list zones: {}", e)))?;

        let zones = listing
            .get("zones")
            .and_then(|zones| zones.as_array())
            .ok_or_else(|| Error::contract_resolution("zone listing has no 'zones' array"))?;
        let first = zones
            .first()
            .ok_or_else(|| Error::contract_resolution("no zones are visible to derive a contract from"))?;
        let contract_id = first
            .get("contractId")
            .and_then(|id| id.as_str())
            .ok_or_else(|| Error::contract_resolution("first zone in listing has no contractId"))?
            .to_string();

        info!("contractId not specified, using contractId={}", contract_id);
        self.settings.contract_id = Some(contract_id.clone());
        Ok(contract_id)
    }

    /// Create `zone` unless the provider already has it
    async fn ensure_zone(&mut self, zone: &str) -> Result<()> {
        match self.client.check_zone(zone).await {
            Ok(_) => {
                debug!("Zone {} exists", zone);
                return Ok(());
            }
            Err(e) => {
                info!("Zone {} not found ({}), creating it", zone, e);
            }
        }

        let contract_id = self
            .resolve_contract_id()
            .await
            .map_err(|e| Error::apply(zone, ApplyStage::ContractResolution, e))?;
        let config = ZoneConfig::primary(zone, self.settings.comment.clone());

        if self.settings.dry_run {
            let payload = serde_json::to_string(&config)
                .map_err(|e| Error::apply(zone, ApplyStage::ZoneCreate, e.into()))?;
            info!(
                "[DRY-RUN] Would create zone {} under contract {} with payload: {}",
                zone, contract_id, payload
            );
            return Ok(());
        }

        self.client
            .create_zone(&contract_id, &config, self.settings.group_id.as_deref())
            .await
            .map_err(|e| Error::apply(zone, ApplyStage::ZoneCreate, e))?;
        info!("Created zone {} under contract {}", zone, contract_id);

        Ok(())
    }

    async fn apply_change(&self, zone: &str, change: &Change) -> Result<()> {
        match change {
            Change::Create { new } => {
                let recordset = to_recordset(new, zone);
                self.send_record(ChangeKind::Create, zone, &recordset, new.record_type())
                    .await
            }
            Change::Update { existing, new } => {
                if existing.key() != new.key() {
                    return Err(Error::invalid_input(format!(
                        "Update must keep name and type: {} -> {}",
                        existing, new
                    )));
                }
                let recordset = to_recordset(new, zone);
                self.send_record(ChangeKind::Update, zone, &recordset, new.record_type())
                    .await
            }
            Change::Delete { existing } => {
                let name = qualify(&existing.name, zone);
                let record_type = existing.record_type();

                if self.settings.dry_run {
                    info!("[DRY-RUN] Would delete {} {}", name, record_type);
                    return Ok(());
                }

                self.client.delete_record(zone, &name, record_type).await?;
                info!("Deleted {} {}", name, record_type);
                Ok(())
            }
        }
    }

    async fn send_record(
        &self,
        kind: ChangeKind,
        zone: &str,
        recordset: &Recordset,
        record_type: RecordType,
    ) -> Result<()> {
        if self.settings.dry_run {
            info!(
                "[DRY-RUN] Would {} {} {} with payload: {}",
                kind,
                recordset.name,
                record_type,
                serde_json::to_string(recordset)?
            );
            return Ok(());
        }

        match kind {
            ChangeKind::Update => {
                self.client
                    .replace_record(zone, &recordset.name, record_type, recordset)
                    .await?
            }
            _ => {
                self.client
                    .create_record(zone, &recordset.name, record_type, recordset)
                    .await?
            }
        }
        info!("{}: {} {} {:?}", kind, recordset.name, record_type, recordset.rdata);
        Ok(())
    }
}

#[async_trait]
impl ZoneProvider for EdgeDnsProvider {
    fn provider_name(&self) -> &'static str {
        crate::PROVIDER_NAME
    }

    fn supports_geo(&self) -> bool {
        false
    }

    fn supports_dynamic(&self) -> bool {
        false
    }

    fn supported_types(&self) -> &'static [RecordType] {
        &RecordType::ALL
    }

    async fn populate(&mut self, zone: &mut Zone, lenient: bool) -> Result<bool> {
        debug!("populate: name={}", zone.name());

        let zone_name = zone.unqualified_name().to_string();
        let before = zone.records().len();
        let recordsets = self.cache.records(&self.client, zone.name()).await;

        let mut seen: HashSet<(String, RecordType)> = HashSet::new();
        for recordset in recordsets {
            let Ok(record_type) = recordset.record_type.parse::<RecordType>() else {
                debug!("Skipping unsupported {} record {}", recordset.record_type, recordset.name);
                continue;
            };

            let name = relativize(&recordset.name, &zone_name);
            if !seen.insert((name.clone(), record_type)) {
                debug!("Ignoring duplicate {} recordset {}", record_type, recordset.name);
                continue;
            }

            match to_record(name, record_type, recordset) {
                Ok(record) => zone.add_record(record, lenient)?,
                Err(e) if lenient => warn!("Skipping recordset: {}", e),
                Err(e) => return Err(e),
            }
        }

        let exists = self.cache.contains(zone.name());
        let found = zone.records().len() - before;
        info!("populate: found {} records, exists={}", found, exists);

        Ok(exists)
    }

    async fn apply(&mut self, plan: &Plan) -> Result<()> {
        let desired = &plan.desired;
        let zone = desired.unqualified_name();
        debug!("apply: zone={}, changes={}", zone, plan.changes.len());

        self.ensure_zone(zone).await?;

        for change in &plan.changes {
            debug!("apply: {}", change);
            self.apply_change(zone, change)
                .await
                .map_err(|e| Error::apply(zone, ApplyStage::for_change(change), e))?;
        }

        self.cache.invalidate(desired.name());
        Ok(())
    }
}
