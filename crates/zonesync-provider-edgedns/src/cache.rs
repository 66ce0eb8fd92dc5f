// # Zone State Cache
//
// Per-zone cache of the recordsets the provider returned, keyed by the
// fully-qualified zone name (with trailing dot).
//
// ## Lifetime
//
// - An entry is created by the first successful fetch for a zone
// - A failed fetch leaves no entry: the zone reads as empty and is fetched again next time
// - The provider invalidates the entry after every successful apply
// - Nothing survives the process
//
// Access is exclusive (`&mut self`); there is no internal locking.

use std::collections::HashMap;
use tracing::{debug, warn};
use zonesync_core::Error;

use crate::client::EdgeDnsClient;
use crate::wire::{Recordset, RecordsetQuery};

/// In-memory recordset cache
#[derive(Debug, Clone, Default)]
pub struct ZoneStateCache {
    entries: HashMap<String, Vec<Recordset>>,
}

impl ZoneStateCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Recordsets of `zone`, fetched through `client` on a miss
    ///
    /// A fetch failure yields an empty slice and caches nothing, so a zone
    /// that does not exist yet reads as a zone with no records.
    pub async fn records(&mut self, client: &EdgeDnsClient, zone: &str) -> &[Recordset] {
        if !self.entries.contains_key(zone) {
            let unqualified = zone.strip_suffix('.').unwrap_or(zone);
            let query = RecordsetQuery::default();

            match client.list_recordsets(unqualified, &query).await {
                Ok(recordsets) => {
                    debug!("Fetched {} recordset(s) for {}", recordsets.len(), zone);
                    self.entries.insert(zone.to_string(), recordsets);
                }
                Err(Error::ProviderStatus { code }) => {
                    debug!("No recordsets for {} (status {}), treating as empty", zone, code);
                    return &[];
                }
                Err(e) => {
                    warn!("Failed to fetch recordsets for {}: {}, treating as empty", zone, e);
                    return &[];
                }
            }
        }

        self.entries.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Store recordsets for `zone`, replacing any cached entry
    pub fn insert(&mut self, zone: impl Into<String>, recordsets: Vec<Recordset>) {
        self.entries.insert(zone.into(), recordsets);
    }

    /// Whether `zone` holds a successfully fetched entry
    pub fn contains(&self, zone: &str) -> bool {
        self.entries.contains_key(zone)
    }

    /// Forget the entry for `zone`, returning whether one existed
    pub fn invalidate(&mut self, zone: &str) -> bool {
        self.entries.remove(zone).is_some()
    }

    /// Get the number of cached zones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
