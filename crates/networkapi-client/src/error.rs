//! Network API client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the Network API
#[derive(Debug, Error)]
pub enum NetworkApiError {
    /// Base endpoint is not an absolute URL with a host
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// The endpoint string as supplied by the caller
        endpoint: String,
        /// Why the endpoint was rejected
        reason: String,
    },

    /// Client configuration is inconsistent (e.g., username without password)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Network-level failure (DNS, connection refused, timeout, body read)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a status outside [200, 400)
    #[error("Request failed: {status} - {body}")]
    RequestFailed {
        /// Response status code
        status: StatusCode,
        /// Raw response body, lossily decoded as UTF-8
        body: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl NetworkApiError {
    /// Status code of a `RequestFailed` error, if that is what this is
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Body decoding failures, one per server API version
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON body did not match the VLAN array shape
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// XML body did not match the VLAN document shape
    #[error("invalid XML body: {0}")]
    Xml(#[from] quick_xml::DeError),
}
