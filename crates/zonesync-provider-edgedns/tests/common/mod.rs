//! Test doubles for Edge DNS provider contract tests
//!
//! `MockTransport` answers requests from canned routes and records every
//! request it sees, so tests can assert on the exact calls the provider made.

#![allow(dead_code)]

use reqwest::Method;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use zonesync_core::{Record, RecordData, Zone};
use zonesync_core::error::Result;
use zonesync_provider_edgedns::{
    ApiRequest, ApiResponse, EdgeDnsClient, EdgeDnsProvider, EdgeDnsSettings, Transport,
};

pub const HOST: &str = "akab.test";

/// Full v2 URL for `path`
pub fn v2(path: &str) -> String {
    format!("https://{}/config-dns/v2/{}", HOST, path)
}

/// Full v1 URL for `path`
pub fn v1(path: &str) -> String {
    format!("https://{}/config-dns/v1/{}", HOST, path)
}

/// A mock Transport with per-route canned responses
///
/// Each route holds a queue of responses. The last queued response keeps
/// answering once the others are used up. Unrouted requests get a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<ApiResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method url`
    pub fn respond(&self, method: Method, url: impl Into<String>, status: u16, body: Value) -> &Self {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.routes
            .lock()
            .unwrap()
            .entry((method, url.into()))
            .or_default()
            .push_back(ApiResponse::new(status, body));
        self
    }

    /// Queue a plain-text response for `method url`
    pub fn respond_text(&self, method: Method, url: impl Into<String>, status: u16, body: &str) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, url.into()))
            .or_default()
            .push_back(ApiResponse::new(status, body));
        self
    }

    /// All requests received, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than GET, in order
    pub fn mutations(&self) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }

    /// Number of requests received for `method url`
    pub fn count(&self, method: &Method, url: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| &r.method == method && r.url == url)
            .count()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(&(request.method.clone(), request.url.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => ApiResponse::new(404, ""),
        };

        Ok(response)
    }
}

/// Provider wired to `transport`
pub fn provider_with(transport: &MockTransport, settings: EdgeDnsSettings) -> EdgeDnsProvider {
    let client = EdgeDnsClient::new(HOST, Arc::new(transport.clone()));
    EdgeDnsProvider::new(client, settings)
}

/// Settings with a fixed contract id
pub fn with_contract(contract_id: &str) -> EdgeDnsSettings {
    EdgeDnsSettings {
        contract_id: Some(contract_id.to_string()),
        ..EdgeDnsSettings::default()
    }
}

/// Recordset listing body
pub fn listing(recordsets: Value) -> Value {
    json!({ "metadata": { "totalElements": 0 }, "recordsets": recordsets })
}

/// Helper to build a zone
pub fn zone(name: &str) -> Zone {
    Zone::new(name).unwrap()
}

/// Helper to build an A record
pub fn a_record(name: &str, ttl: u32, values: &[&str]) -> Record {
    Record::new(
        name,
        ttl,
        RecordData::A(values.iter().map(|v| v.to_string()).collect()),
    )
}
