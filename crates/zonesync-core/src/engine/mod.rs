//! Zone sync engine
//!
//! The SyncEngine is responsible for:
//! - Reading the provider's current view of a zone
//! - Asking the planner for the changes that reach the desired zone
//! - Handing the plan to the provider for application
//!
//! ## Architecture
//!
//! ```text
//!  desired Zone
//!       │
//!       ▼
//! ┌──────────────┐  populate   ┌──────────────┐
//! │  SyncEngine  │────────────▶│ ZoneProvider │
//! └──────────────┘             └──────────────┘
//!       │   ▲                         ▲
//!  plan │   │ changes                 │ apply
//!       ▼   │                         │
//! ┌──────────────┐                    │
//! │   Planner    │────── Plan ────────┘
//! └──────────────┘
//! ```
//!
//! ## Flow
//!
//! 1. Drop desired records the provider cannot represent
//! 2. Populate an empty copy of the zone from the provider
//! 3. Plan changes (external)
//! 4. Skip when there is nothing to do, otherwise apply
//! 5. Emit events for monitoring/logging

use crate::config::{EngineConfig, SyncConfig};
use crate::error::Result;
use crate::plan::Plan;
use crate::traits::{Planner, ZoneProvider};
use crate::zone::Zone;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Events emitted by the SyncEngine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Sync of a zone started
    SyncStarted { zone: String },

    /// Provider state loaded
    Populated {
        zone: String,
        existed: bool,
        records: usize,
    },

    /// Provider already matches the desired zone
    NoChanges { zone: String },

    /// Plan applied successfully
    ApplySucceeded { zone: String, changes: usize },

    /// Populate or apply failed
    SyncFailed { zone: String, error: String },
}

/// Outcome of a successful sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Fully-qualified zone name
    pub zone: String,
    /// Whether the zone already existed on the provider
    pub existed: bool,
    /// Number of changes applied
    pub changes: usize,
}

/// Zone sync engine
///
/// Drives one provider and one planner. Each call to [`SyncEngine::sync`]
/// runs populate → plan → apply sequentially; nothing runs in the background.
pub struct SyncEngine {
    /// Provider holding the zone
    provider: Box<dyn ZoneProvider>,

    /// External change planner
    planner: Box<dyn Planner>,

    /// Skip untranslatable provider records
    lenient: bool,

    /// Event sender for external monitoring
    event_tx: mpsc::Sender<EngineEvent>,
}

impl SyncEngine {
    /// Create a new sync engine
    ///
    /// # Returns
    ///
    /// A tuple of (engine, event_receiver) where event_receiver yields engine events
    pub fn new(
        provider: Box<dyn ZoneProvider>,
        planner: Box<dyn Planner>,
        config: &SyncConfig,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>)> {
        config.validate()?;
        Ok(Self::with_engine_config(provider, planner, &config.engine))
    }

    /// Create an engine from engine settings only
    ///
    /// Used when the provider was built outside the registry.
    pub fn with_engine_config(
        provider: Box<dyn ZoneProvider>,
        planner: Box<dyn Planner>,
        engine: &EngineConfig,
    ) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (tx, rx) = mpsc::channel(engine.event_channel_capacity.max(1));

        let engine = Self {
            provider,
            planner,
            lenient: engine.lenient,
            event_tx: tx,
        };

        (engine, rx)
    }

    /// Reconcile the provider's copy of `desired.name()` with `desired`
    ///
    /// # Returns
    ///
    /// - `Ok(SyncReport)`: The provider now matches the plan
    /// - `Err(Error)`: Populate or apply failed; see `Error::Apply` for the stage
    pub async fn sync(&mut self, desired: &Zone) -> Result<SyncReport> {
        let zone_name = desired.name().to_string();
        self.emit_event(EngineEvent::SyncStarted {
            zone: zone_name.clone(),
        });

        match self.sync_inner(desired).await {
            Ok(report) => Ok(report),
            Err(e) => {
                error!("Sync of zone {} failed: {}", zone_name, e);
                self.emit_event(EngineEvent::SyncFailed {
                    zone: zone_name,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn sync_inner(&mut self, desired: &Zone) -> Result<SyncReport> {
        let mut target = desired.clone();
        let dropped = {
            let provider = &self.provider;
            target.retain_types(|t| provider.supports(t))
        };
        if dropped > 0 {
            warn!(
                "Provider {} does not support {} record(s) in {}, skipping them",
                self.provider.provider_name(),
                dropped,
                desired.name()
            );
        }

        let mut existing = desired.empty_copy();
        let existed = self.provider.populate(&mut existing, self.lenient).await?;
        debug!(
            "Populated {} from {}: {} record(s), exists={}",
            existing.name(),
            self.provider.provider_name(),
            existing.records().len(),
            existed
        );
        self.emit_event(EngineEvent::Populated {
            zone: existing.name().to_string(),
            existed,
            records: existing.records().len(),
        });

        let changes = self.planner.plan(&existing, &target);
        if changes.is_empty() {
            info!("Zone {} is up to date", target.name());
            self.emit_event(EngineEvent::NoChanges {
                zone: target.name().to_string(),
            });
            return Ok(SyncReport {
                zone: target.name().to_string(),
                existed,
                changes: 0,
            });
        }

        let count = changes.len();
        info!("Applying {} change(s) to zone {}", count, target.name());
        let plan = Plan::new(target, changes);
        self.provider.apply(&plan).await?;

        self.emit_event(EngineEvent::ApplySucceeded {
            zone: plan.desired.name().to_string(),
            changes: count,
        });

        Ok(SyncReport {
            zone: plan.desired.name().to_string(),
            existed,
            changes: count,
        })
    }

    /// Emit an engine event
    fn emit_event(&self, event: EngineEvent) {
        if self.event_tx.try_send(event).is_err() {
            warn!("Event channel full, dropping event. Consider increasing event_channel_capacity.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_event_equality() {
        let event = EngineEvent::Populated {
            zone: "example.com.".to_string(),
            existed: true,
            records: 3,
        };

        assert_eq!(event.clone(), event);
        assert_ne!(
            event,
            EngineEvent::NoChanges {
                zone: "example.com.".to_string()
            }
        );
    }
}
