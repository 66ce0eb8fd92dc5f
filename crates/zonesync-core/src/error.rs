//! Error types for zone synchronization
//!
//! This module defines all error types used throughout the workspace.

use crate::plan::ApplyStage;
use crate::record::RecordType;
use thiserror::Error;

/// Result type alias for zonesync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for zone synchronization
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the provider API
    #[error("Provider error: {}", describe_status(*code))]
    ProviderStatus {
        /// HTTP status code
        code: u16,
    },

    /// No contract id configured and none could be discovered
    #[error("Contract resolution failed: {0}")]
    ContractResolution(String),

    /// Provider record data that does not match the expected shape for its type
    #[error("Cannot translate {record_type} record '{name}': {message}")]
    Translation {
        /// Provider-side owner name
        name: String,
        /// Record type being translated
        record_type: RecordType,
        /// What was wrong with the data
        message: String,
    },

    /// Terminal failure of an apply, with the stage that failed
    #[error("Apply failed for zone {zone} at {stage}: {source}")]
    Apply {
        /// Unqualified zone name
        zone: String,
        /// Stage of the apply that failed
        stage: ApplyStage,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Both the primary and the fallback API surface failed
    #[error("Primary request failed ({primary}) and fallback failed ({fallback})")]
    FallbackFailed {
        /// Failure of the primary (v2) request
        primary: Box<Error>,
        /// Failure of the fallback (v1) request
        fallback: Box<Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport errors (connection, TLS, signing)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a provider status error
    pub fn status(code: u16) -> Self {
        Self::ProviderStatus { code }
    }

    /// Create a contract resolution error
    pub fn contract_resolution(msg: impl Into<String>) -> Self {
        Self::ContractResolution(msg.into())
    }

    /// Create a translation error
    pub fn translation(
        name: impl Into<String>,
        record_type: RecordType,
        message: impl Into<String>,
    ) -> Self {
        Self::Translation {
            name: name.into(),
            record_type,
            message: message.into(),
        }
    }

    /// Wrap an error with the apply stage it happened in
    pub fn apply(zone: impl Into<String>, stage: ApplyStage, source: Error) -> Self {
        Self::Apply {
            zone: zone.into(),
            stage,
            source: Box::new(source),
        }
    }

    /// Create a fallback error from both failures
    pub fn fallback_failed(primary: Error, fallback: Error) -> Self {
        Self::FallbackFailed {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// HTTP status code if this is a provider status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ProviderStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Whether this is a provider status error
    pub fn is_provider_status(&self) -> bool {
        self.status_code().is_some()
    }
}

/// Fixed description for a provider status code
pub fn describe_status(code: u16) -> String {
    let text = match code {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Access is forbidden",
        404 => "Resource not found",
        405 => "Method not supported",
        406 => "Not Acceptable",
        409 => "Request not allowed due to conflict with current state of resource",
        415 => "Unsupported media type",
        422 => "Request body contains an error preventing processing",
        500 => "Internal server error",
        _ => "Unexpected status",
    };
    format!("{}: {}", code, text)
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
