// # Canonical Records
//
// Provider-agnostic representation of DNS records.
//
// A record is identified inside a zone by its relative owner name and its
// type. The empty name is the zone apex. Values are structured per type;
// numeric fields stay in the decimal string form providers hand out so that
// translation back to the wire is exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS record types understood by the canonical model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Spf,
    Srv,
    Sshfp,
    Txt,
}

impl RecordType {
    /// Every record type, in wire-name order
    pub const ALL: [RecordType; 11] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Naptr,
        RecordType::Ns,
        RecordType::Ptr,
        RecordType::Spf,
        RecordType::Srv,
        RecordType::Sshfp,
        RecordType::Txt,
    ];

    /// Wire name of the type (e.g. "AAAA")
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Spf => "SPF",
            RecordType::Srv => "SRV",
            RecordType::Sshfp => "SSHFP",
            RecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| crate::Error::invalid_input(format!("Unsupported record type: {}", s)))
    }
}

/// MX value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxValue {
    pub preference: String,
    pub exchange: String,
}

/// NAPTR value; `flags`, `service` and `regexp` are stored unquoted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrValue {
    pub order: String,
    pub preference: String,
    pub flags: String,
    pub service: String,
    pub regexp: String,
    pub replacement: String,
}

/// SRV value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvValue {
    pub priority: String,
    pub weight: String,
    pub port: String,
    pub target: String,
}

/// SSHFP value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshfpValue {
    pub algorithm: String,
    pub fingerprint_type: String,
    pub fingerprint: String,
}

/// Type-specific record data
///
/// CNAME and PTR carry a single value, every other type a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "UPPERCASE")]
pub enum RecordData {
    A(Vec<String>),
    Aaaa(Vec<String>),
    Cname(String),
    Mx(Vec<MxValue>),
    Naptr(Vec<NaptrValue>),
    Ns(Vec<String>),
    Ptr(String),
    Spf(Vec<String>),
    Srv(Vec<SrvValue>),
    Sshfp(Vec<SshfpValue>),
    Txt(Vec<String>),
}

impl RecordData {
    /// The record type this data belongs to
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::Aaaa,
            RecordData::Cname(_) => RecordType::Cname,
            RecordData::Mx(_) => RecordType::Mx,
            RecordData::Naptr(_) => RecordType::Naptr,
            RecordData::Ns(_) => RecordType::Ns,
            RecordData::Ptr(_) => RecordType::Ptr,
            RecordData::Spf(_) => RecordType::Spf,
            RecordData::Srv(_) => RecordType::Srv,
            RecordData::Sshfp(_) => RecordType::Sshfp,
            RecordData::Txt(_) => RecordType::Txt,
        }
    }
}

/// A DNS record as seen by the zone description layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Owner name relative to the zone; empty for the apex
    pub name: String,
    /// Time-to-live in seconds
    pub ttl: u32,
    /// Type-specific values
    pub data: RecordData,
}

impl Record {
    /// Create a new record
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// The record's type
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Whether this record sits at the zone apex
    pub fn is_apex(&self) -> bool {
        self.name.is_empty()
    }

    /// The (name, type) pair identifying this record within a zone
    pub fn key(&self) -> (&str, RecordType) {
        (&self.name, self.record_type())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_apex() { "@" } else { &self.name };
        write!(f, "{} {} (TTL: {})", name, self.record_type(), self.ttl)
    }
}
