// # HTTP Transport
//
// The client never talks to reqwest directly. Every call goes through a
// `Transport`, which lets tests substitute a recording double and keeps
// request signing outside this crate.
//
// ## Signing
//
// The config-dns API requires signed requests. Signing is supplied by the
// caller as a `RequestSigner`; `ReqwestTransport` builds the request, hands
// it to the signer, then executes whatever the signer returns.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use zonesync_core::{Error, Result};

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully resolved API request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of an API response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is within 200..=299
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Executes API requests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response, whatever its status
    ///
    /// Only failures to obtain a response at all are errors here.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Signs outgoing requests (e.g. EdgeGrid HMAC authentication)
pub trait RequestSigner: Send + Sync {
    /// Return `request` with authentication applied
    fn sign(&self, request: reqwest::Request) -> Result<reqwest::Request>;
}

/// Transport backed by a reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
    signer: Arc<dyn RequestSigner>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("signer", &"<REDACTED>")
            .finish()
    }
}

impl ReqwestTransport {
    /// Create a transport with the default 30 second timeout
    pub fn new(signer: Arc<dyn RequestSigner>) -> Result<Self> {
        Self::with_timeout(signer, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(signer: Arc<dyn RequestSigner>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, signer })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header("Accept", "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let built = builder
            .build()
            .map_err(|e| Error::http(format!("Invalid request: {}", e)))?;
        let signed = self.signer.sign(built)?;

        let response = self
            .client
            .execute(signed)
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
