//! Zones: a fully-qualified name plus the canonical records inside it

use crate::error::{Error, Result};
use crate::record::{Record, RecordType};
use tracing::warn;

/// A DNS zone
///
/// The name is fully qualified and always ends with `.`. Within one zone a
/// (name, type) pair appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    records: Vec<Record>,
}

impl Zone {
    /// Create an empty zone
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `name` is empty or does not end with `.`
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.len() < 2 || !name.ends_with('.') {
            return Err(Error::invalid_input(format!(
                "Zone name must be fully qualified with a trailing dot: '{}'",
                name
            )));
        }

        Ok(Self {
            name,
            records: Vec::new(),
        })
    }

    /// Fully-qualified name, with trailing dot
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the trailing dot, as the provider API expects it
    pub fn unqualified_name(&self) -> &str {
        &self.name[..self.name.len() - 1]
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by (name, type)
    pub fn get(&self, name: &str, record_type: RecordType) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.name == name && r.record_type() == record_type)
    }

    /// Add a record to the zone
    ///
    /// A record whose (name, type) is already present is rejected. With
    /// `lenient` the existing record is kept and the newcomer is dropped.
    pub fn add_record(&mut self, record: Record, lenient: bool) -> Result<()> {
        if self.get(&record.name, record.record_type()).is_some() {
            if lenient {
                warn!(
                    "Zone {}: ignoring duplicate {} record '{}'",
                    self.name,
                    record.record_type(),
                    record.name
                );
                return Ok(());
            }
            return Err(Error::invalid_input(format!(
                "Duplicate {} record '{}' in zone {}",
                record.record_type(),
                record.name,
                self.name
            )));
        }

        self.records.push(record);
        Ok(())
    }

    /// Drop all records whose type fails `keep`, returning how many were removed
    pub fn retain_types(&mut self, keep: impl Fn(RecordType) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| keep(r.record_type()));
        before - self.records.len()
    }

    /// An empty zone with the same name
    pub fn empty_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            records: Vec::new(),
        }
    }
}
