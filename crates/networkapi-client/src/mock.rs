//! Mock Network API client for unit testing
//!
//! This module provides a mock implementation of NetworkApiClientTrait that can be used
//! in unit tests without requiring a running Network API server.

use crate::common::Endpoint;
use crate::error::NetworkApiError;
use crate::models::{ApiVersion, ListVlansOptions, Vlan};
use crate::network_trait::NetworkApiClientTrait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

/// Mock Network API client for testing
///
/// This mock stores VLANs in memory and can be configured to fail, so callers
/// can exercise both the success and error paths of code built on the trait.
#[derive(Debug, Clone)]
pub struct MockNetworkApiClient {
    endpoint: Endpoint,
    api_version: ApiVersion,
    vlans: Arc<Mutex<Vec<Vlan>>>,
    failure: Arc<Mutex<Option<(StatusCode, String)>>>,
    calls: Arc<Mutex<Vec<ListVlansOptions>>>,
}

impl MockNetworkApiClient {
    /// Create a new mock client
    pub fn new(endpoint: &str, api_version: ApiVersion) -> Result<Self, NetworkApiError> {
        Ok(Self {
            endpoint: Endpoint::parse(endpoint)?,
            api_version,
            vlans: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Add a VLAN to the mock store (for test setup)
    pub fn add_vlan(&self, vlan: Vlan) {
        self.vlans.lock().unwrap().push(vlan);
    }

    /// Make every subsequent call fail with `RequestFailed`
    pub fn fail_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.failure.lock().unwrap() = Some((status, body.into()));
    }

    /// Go back to answering from the store
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Options of every `list_vlans` call so far
    pub fn calls(&self) -> Vec<ListVlansOptions> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NetworkApiClientTrait for MockNetworkApiClient {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    async fn list_vlans(&self, options: &ListVlansOptions) -> Result<Vec<Vlan>, NetworkApiError> {
        self.calls.lock().unwrap().push(options.clone());

        if let Some((status, body)) = self.failure.lock().unwrap().clone() {
            return Err(NetworkApiError::RequestFailed { status, body });
        }

        Ok(self.vlans.lock().unwrap().clone())
    }
}
