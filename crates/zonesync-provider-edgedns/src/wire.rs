//! JSON shapes exchanged with the config-dns API

use serde::{Deserialize, Serialize};

/// One recordset as the API returns and accepts it
///
/// `name` is fully qualified without a trailing dot; `rdata` holds the
/// presentation-format values, one string per value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recordset {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    #[serde(default)]
    pub rdata: Vec<String>,
}

/// Response of `GET zones/{zone}/recordsets`
///
/// The API may omit `recordsets` or send it as `null` for an empty zone.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecordsetList {
    #[serde(default)]
    pub recordsets: Option<Vec<Recordset>>,
}

/// Body of `POST zones`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub zone: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub comment: Option<String>,
    #[serde(default)]
    pub masters: Vec<String>,
}

impl ZoneConfig {
    /// Primary zone with no masters
    pub fn primary(zone: impl Into<String>, comment: Option<String>) -> Self {
        Self {
            zone: zone.into(),
            zone_type: "primary".to_string(),
            comment,
            masters: Vec::new(),
        }
    }
}

/// Query parameters of `GET zones`
#[derive(Debug, Clone)]
pub struct ZoneListQuery {
    pub contract_ids: Option<String>,
    pub group_id: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub show_all: bool,
    pub sort_by: Option<String>,
    pub types: Option<String>,
}

impl Default for ZoneListQuery {
    fn default() -> Self {
        Self {
            contract_ids: None,
            group_id: None,
            page: None,
            page_size: None,
            search: None,
            show_all: true,
            sort_by: Some("zone".to_string()),
            types: None,
        }
    }
}

impl ZoneListQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "contractIds", self.contract_ids.as_deref());
        push(&mut query, "gid", self.group_id.as_deref());
        push(&mut query, "page", self.page.map(|p| p.to_string()).as_deref());
        push(&mut query, "pageSize", self.page_size.map(|p| p.to_string()).as_deref());
        push(&mut query, "search", self.search.as_deref());
        push(&mut query, "showAll", Some(if self.show_all { "true" } else { "false" }));
        push(&mut query, "sortBy", self.sort_by.as_deref());
        push(&mut query, "types", self.types.as_deref());
        query
    }
}

/// Query parameters of `GET zones/{zone}/recordsets`
#[derive(Debug, Clone)]
pub struct RecordsetQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub show_all: bool,
    pub sort_by: Option<String>,
    pub types: Option<String>,
}

impl Default for RecordsetQuery {
    fn default() -> Self {
        Self {
            page: None,
            page_size: Some(30),
            search: None,
            show_all: true,
            sort_by: Some("name".to_string()),
            types: None,
        }
    }
}

impl RecordsetQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push(&mut query, "page", self.page.map(|p| p.to_string()).as_deref());
        push(&mut query, "pageSize", self.page_size.map(|p| p.to_string()).as_deref());
        push(&mut query, "search", self.search.as_deref());
        push(&mut query, "showAll", Some(if self.show_all { "true" } else { "false" }));
        push(&mut query, "sortBy", self.sort_by.as_deref());
        push(&mut query, "types", self.types.as_deref());
        query
    }
}

fn push(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}
