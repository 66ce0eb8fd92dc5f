// # config-dns API Client
//
// Thin typed wrapper over the config-dns REST API.
//
// ## API Reference
//
// - Zone: GET `/zones/{zone}`, POST `/zones?contractId=&gid=`, GET `/zones`
// - Recordsets: GET `/zones/{zone}/recordsets`
// - Record: GET|POST|PUT|DELETE `/zones/{zone}/names/{name}/types/{type}`
// - Contracts: GET `/data/contracts?gid=`
// - Zone file: GET `/zones/{zone}/zone-file` (v2), GET `/zones/{zone}` (v1 fallback)
//
// Any response with a status outside 200..=299 becomes `Error::ProviderStatus`.
// Nothing here retries, except the zone file export's single v1 fallback.

use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::wire::{Recordset, RecordsetList, RecordsetQuery, ZoneConfig, ZoneListQuery};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;
use zonesync_core::{Error, RecordType, Result};

/// API surface version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// `config-dns/v2`, used for everything by default
    V2,
    /// `config-dns/v1`, only used as the zone file fallback
    V1,
}

/// Client for the config-dns API
#[derive(Clone)]
pub struct EdgeDnsClient {
    base_v2: String,
    base_v1: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for EdgeDnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeDnsClient")
            .field("base_v2", &self.base_v2)
            .field("base_v1", &self.base_v1)
            .finish()
    }
}

impl EdgeDnsClient {
    /// Create a client for `host` (bare hostname, no scheme)
    pub fn new(host: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_v2: format!("https://{}/config-dns/v2/", host),
            base_v1: format!("https://{}/config-dns/v1/", host),
            transport,
        }
    }

    /// Full URL for `path` on the given API version
    pub fn url(&self, path: &str, version: ApiVersion) -> String {
        let base = match version {
            ApiVersion::V2 => &self.base_v2,
            ApiVersion::V1 => &self.base_v1,
        };
        format!("{}{}", base, path.trim_start_matches('/'))
    }

    /// Issue a request and map non-2xx statuses to `Error::ProviderStatus`
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
        version: ApiVersion,
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            url: self.url(path, version),
            query,
            body,
        };
        debug!("{} {}", request.method, request.url);

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            debug!("Request failed with status {}", response.status);
            return Err(Error::status(response.status));
        }

        Ok(response)
    }

    async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<ApiResponse> {
        self.request(Method::GET, path, query, None, ApiVersion::V2)
            .await
    }

    /// Fetch one recordset
    pub async fn get_record(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Recordset> {
        self.get(&record_path(zone, name, record_type), Vec::new())
            .await?
            .json()
    }

    /// Create a recordset
    pub async fn create_record(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
        recordset: &Recordset,
    ) -> Result<()> {
        let body = serde_json::to_value(recordset)?;
        self.request(
            Method::POST,
            &record_path(zone, name, record_type),
            Vec::new(),
            Some(body),
            ApiVersion::V2,
        )
        .await?;
        Ok(())
    }

    /// Replace an existing recordset
    pub async fn replace_record(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
        recordset: &Recordset,
    ) -> Result<()> {
        let body = serde_json::to_value(recordset)?;
        self.request(
            Method::PUT,
            &record_path(zone, name, record_type),
            Vec::new(),
            Some(body),
            ApiVersion::V2,
        )
        .await?;
        Ok(())
    }

    /// Delete a recordset
    pub async fn delete_record(&self, zone: &str, name: &str, record_type: RecordType) -> Result<()> {
        let response = self
            .request(
                Method::DELETE,
                &record_path(zone, name, record_type),
                Vec::new(),
                None,
                ApiVersion::V2,
            )
            .await?;
        debug!("Deleted {} {} (status {})", name, record_type, response.status);
        Ok(())
    }

    /// Whether `zone` exists, judged by the status of `GET zones/{zone}` alone
    ///
    /// The body is never decoded. Error statuses are returned as errors so
    /// callers can log them.
    pub async fn check_zone(&self, zone: &str) -> Result<()> {
        self.get(&format!("zones/{}", zone), Vec::new()).await?;
        Ok(())
    }

    /// Zone details
    pub async fn get_zone(&self, zone: &str) -> Result<serde_json::Value> {
        let response = self.get(&format!("zones/{}", zone), Vec::new()).await?;
        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        response.json()
    }

    /// Create a zone under `contract_id`, optionally in group `group_id`
    pub async fn create_zone(
        &self,
        contract_id: &str,
        config: &ZoneConfig,
        group_id: Option<&str>,
    ) -> Result<()> {
        let mut query = vec![("contractId".to_string(), contract_id.to_string())];
        if let Some(gid) = group_id {
            query.push(("gid".to_string(), gid.to_string()));
        }

        let body = serde_json::to_value(config)?;
        self.request(Method::POST, "zones", query, Some(body), ApiVersion::V2)
            .await?;
        Ok(())
    }

    /// List zones; the raw JSON carries a `zones` array
    pub async fn list_zones(&self, query: &ZoneListQuery) -> Result<serde_json::Value> {
        self.get("zones", query.to_query()).await?.json()
    }

    /// List the recordsets of a zone
    ///
    /// A response without a `recordsets` field yields an empty list.
    pub async fn list_recordsets(
        &self,
        zone: &str,
        query: &RecordsetQuery,
    ) -> Result<Vec<Recordset>> {
        let list: RecordsetList = self
            .get(&format!("zones/{}/recordsets", zone), query.to_query())
            .await?
            .json()?;
        Ok(list.recordsets.unwrap_or_default())
    }

    /// Contracts visible to the credentials, optionally within a group
    pub async fn list_contracts(&self, group_id: Option<&str>) -> Result<serde_json::Value> {
        let query = group_id
            .map(|gid| vec![("gid".to_string(), gid.to_string())])
            .unwrap_or_default();
        self.get("data/contracts", query).await?.json()
    }

    /// Master zone file export
    ///
    /// Tries the v2 `zone-file` endpoint first. If it answers with an error
    /// status, the v1 zone endpoint is used instead and the v2 failure is
    /// dropped. When both fail, both errors are returned together.
    pub async fn get_master_zone_file(&self, zone: &str) -> Result<String> {
        let primary = match self.get(&format!("zones/{}/zone-file", zone), Vec::new()).await {
            Ok(response) => return Ok(response.body),
            Err(e @ Error::ProviderStatus { .. }) => e,
            Err(e) => return Err(e),
        };

        debug!(
            "v2 zone file export for {} failed ({}), falling back to v1",
            zone, primary
        );

        match self
            .request(
                Method::GET,
                &format!("zones/{}", zone),
                Vec::new(),
                None,
                ApiVersion::V1,
            )
            .await
        {
            Ok(response) => Ok(response.body),
            Err(fallback) => Err(Error::fallback_failed(primary, fallback)),
        }
    }
}

fn record_path(zone: &str, name: &str, record_type: RecordType) -> String {
    format!("zones/{}/names/{}/types/{}", zone, name, record_type)
}
