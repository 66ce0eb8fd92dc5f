//! Test doubles and common utilities for sync engine contract tests
//!
//! This module provides minimal test doubles that record how the engine
//! drives providers and planners.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use zonesync_core::error::{Error, Result};
use zonesync_core::{ApplyStage, Change, Plan, Planner, Record, RecordData, RecordType, Zone, ZoneProvider};

const MOCK_TYPES: &[RecordType] = &[RecordType::A, RecordType::Aaaa, RecordType::Txt];

/// A mock ZoneProvider that serves fixed records and records applied plans
pub struct MockZoneProvider {
    /// Records returned by populate()
    records: Vec<Record>,
    /// Whether the zone "exists" on the provider
    exists: bool,
    /// Fail apply() with a provider status error
    fail_apply: bool,
    /// Call counter for populate()
    populate_call_count: Arc<AtomicUsize>,
    /// Plans passed to apply()
    applied: Arc<Mutex<Vec<Plan>>>,
}

impl MockZoneProvider {
    pub fn new(records: Vec<Record>, exists: bool) -> Self {
        Self {
            records,
            exists,
            fail_apply: false,
            populate_call_count: Arc::new(AtomicUsize::new(0)),
            applied: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every apply() fail
    pub fn failing(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    /// Create a new MockZoneProvider that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            records: other.records.clone(),
            exists: other.exists,
            fail_apply: other.fail_apply,
            populate_call_count: Arc::clone(&other.populate_call_count),
            applied: Arc::clone(&other.applied),
        }
    }

    /// Get the number of times populate() was called
    pub fn populate_call_count(&self) -> usize {
        self.populate_call_count.load(Ordering::SeqCst)
    }

    /// Plans received by apply(), in call order
    pub fn applied_plans(&self) -> Vec<Plan> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ZoneProvider for MockZoneProvider {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn supports_geo(&self) -> bool {
        false
    }

    fn supports_dynamic(&self) -> bool {
        false
    }

    fn supported_types(&self) -> &'static [RecordType] {
        MOCK_TYPES
    }

    async fn populate(&mut self, zone: &mut Zone, lenient: bool) -> Result<bool> {
        self.populate_call_count.fetch_add(1, Ordering::SeqCst);
        for record in &self.records {
            zone.add_record(record.clone(), lenient)?;
        }
        Ok(self.exists)
    }

    async fn apply(&mut self, plan: &Plan) -> Result<()> {
        if self.fail_apply {
            let change = &plan.changes[0];
            return Err(Error::apply(
                plan.desired.unqualified_name(),
                ApplyStage::for_change(change),
                Error::status(500),
            ));
        }
        self.applied.lock().unwrap().push(plan.clone());
        Ok(())
    }
}

/// Naive (name, type) diff: creates, then updates, then deletes
pub struct DiffPlanner;

impl Planner for DiffPlanner {
    fn plan(&self, existing: &Zone, desired: &Zone) -> Vec<Change> {
        let mut creates = Vec::new();
        let mut updates = Vec::new();
        let mut deletes = Vec::new();

        for new in desired.records() {
            match existing.get(&new.name, new.record_type()) {
                None => creates.push(Change::Create { new: new.clone() }),
                Some(old) if old != new => updates.push(Change::Update {
                    existing: old.clone(),
                    new: new.clone(),
                }),
                Some(_) => {}
            }
        }
        for old in existing.records() {
            if desired.get(&old.name, old.record_type()).is_none() {
                deletes.push(Change::Delete {
                    existing: old.clone(),
                });
            }
        }

        creates.into_iter().chain(updates).chain(deletes).collect()
    }
}

/// Helper to build an A record
pub fn a_record(name: &str, ttl: u32, ip: &str) -> Record {
    Record::new(name, ttl, RecordData::A(vec![ip.to_string()]))
}

/// Helper to build a zone from records
pub fn zone_with(name: &str, records: Vec<Record>) -> Zone {
    let mut zone = Zone::new(name).expect("valid zone name");
    for record in records {
        zone.add_record(record, false).expect("unique records");
    }
    zone
}
