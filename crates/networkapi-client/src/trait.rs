//! Capability trait shared by every Network API client
//!
//! Both server API versions (JSON and XML) implement this trait, and
//! `MockNetworkApiClient` implements it for unit tests.

use crate::common::Endpoint;
use crate::error::NetworkApiError;
use crate::models::{ApiVersion, ListVlansOptions, Vlan};

/// Trait for Network API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetworkApiClientTrait: Send + Sync {
    /// Get the base endpoint
    fn endpoint(&self) -> &Endpoint;

    /// Server API version this client speaks
    fn api_version(&self) -> ApiVersion;

    /// List VLANs matching `options`
    ///
    /// Sends exactly one request. On error no partial result is returned.
    async fn list_vlans(&self, options: &ListVlansOptions) -> Result<Vec<Vlan>, NetworkApiError>;
}
