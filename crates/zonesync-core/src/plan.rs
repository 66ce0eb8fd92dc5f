//! Change plans consumed by providers
//!
//! Plans are computed by an external [`Planner`](crate::traits::Planner).
//! Providers apply the changes in the order given and never reorder them.

use crate::record::{Record, RecordType};
use crate::zone::Zone;
use std::fmt;

/// Kind of a change, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::Create => "Create",
            ChangeKind::Update => "Update",
            ChangeKind::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// A single change to a zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Add a record that does not exist yet
    Create { new: Record },
    /// Replace an existing record with the same (name, type)
    Update { existing: Record, new: Record },
    /// Remove an existing record
    Delete { existing: Record },
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Create { .. } => ChangeKind::Create,
            Change::Update { .. } => ChangeKind::Update,
            Change::Delete { .. } => ChangeKind::Delete,
        }
    }

    /// The record the change is addressed to
    ///
    /// For updates and deletes this is the existing record.
    pub fn record(&self) -> &Record {
        match self {
            Change::Create { new } => new,
            Change::Update { existing, .. } => existing,
            Change::Delete { existing } => existing,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.record())
    }
}

/// Desired zone plus the ordered changes that reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub desired: Zone,
    pub changes: Vec<Change>,
}

impl Plan {
    pub fn new(desired: Zone, changes: Vec<Change>) -> Self {
        Self { desired, changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Stage of an apply that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStage {
    /// Discovering a contract id for zone creation
    ContractResolution,
    /// Creating a missing zone
    ZoneCreate,
    /// Applying one change
    Change {
        kind: ChangeKind,
        name: String,
        record_type: RecordType,
    },
}

impl ApplyStage {
    /// Stage describing `change`
    pub fn for_change(change: &Change) -> Self {
        let record = change.record();
        ApplyStage::Change {
            kind: change.kind(),
            name: record.name.clone(),
            record_type: record.record_type(),
        }
    }
}

impl fmt::Display for ApplyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyStage::ContractResolution => f.write_str("contract resolution"),
            ApplyStage::ZoneCreate => f.write_str("zone creation"),
            ApplyStage::Change {
                kind,
                name,
                record_type,
            } => {
                let name = if name.is_empty() { "@" } else { name };
                write!(f, "{} of {} record '{}'", kind, record_type, name)
            }
        }
    }
}
