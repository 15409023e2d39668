//! JSON server API version
//!
//! `GET /vlan/find`, no request body, response is a JSON array of VLANs.

use crate::auth::{HeaderCredentials, RequestAuthenticator};
use crate::common::{Endpoint, HttpClient, build_transport};
use crate::error::{DecodeError, NetworkApiError};
use crate::models::{ApiVersion, ListVlansOptions, Vlan};
use crate::network_trait::NetworkApiClientTrait;
use reqwest::{Client, Method};
use std::sync::Arc;
use tracing::debug;

const VLAN_FIND_PATH: &str = "/vlan/find";

/// Client for the JSON server API version
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: HttpClient,
}

impl JsonClient {
    /// Create a new unauthenticated client
    ///
    /// # Arguments
    /// * `endpoint` - Base URL (e.g., "http://networkapi:8080")
    pub fn new(endpoint: &str) -> Result<Self, NetworkApiError> {
        Self::build(endpoint, None, None)
    }

    /// Create a client that sends username/password headers
    pub fn with_credentials(
        endpoint: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, NetworkApiError> {
        let auth = Arc::new(HeaderCredentials::new(username, password));
        Self::with_authenticator(endpoint, auth)
    }

    /// Create a client with a custom authentication scheme
    pub fn with_authenticator(
        endpoint: &str,
        auth: Arc<dyn RequestAuthenticator>,
    ) -> Result<Self, NetworkApiError> {
        Self::build(endpoint, Some(auth), None)
    }

    /// Create a client on an already built transport
    ///
    /// No default transport is created, so the caller's pool is the only one.
    pub fn from_transport(
        endpoint: &str,
        auth: Option<Arc<dyn RequestAuthenticator>>,
        transport: Client,
    ) -> Result<Self, NetworkApiError> {
        Self::build(endpoint, auth, Some(transport))
    }

    fn build(
        endpoint: &str,
        auth: Option<Arc<dyn RequestAuthenticator>>,
        transport: Option<Client>,
    ) -> Result<Self, NetworkApiError> {
        let endpoint = Endpoint::parse(endpoint)?;
        let transport = match transport {
            Some(transport) => transport,
            None => build_transport(None)?,
        };
        Ok(Self {
            http: HttpClient::new(transport, endpoint, auth),
        })
    }

    /// Use a caller-supplied transport (custom TLS, default timeout, ...)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http.set_client(client);
        self
    }

    /// Decode a JSON VLAN array
    ///
    /// A `null` body is what the server sends for zero matches.
    pub fn decode(body: &[u8]) -> Result<Vec<Vlan>, DecodeError> {
        let vlans: Option<Vec<Vlan>> = serde_json::from_slice(body)?;
        Ok(vlans.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl NetworkApiClientTrait for JsonClient {
    fn endpoint(&self) -> &Endpoint {
        self.http.endpoint()
    }

    fn api_version(&self) -> ApiVersion {
        ApiVersion::Json
    }

    async fn list_vlans(
        &self,
        options: &ListVlansOptions,
    ) -> Result<Vec<Vlan>, NetworkApiError> {
        if !options.name.is_empty() {
            debug!("JSON API has no name filter, ignoring {:?}", options.name);
        }

        let request = self.http.request(Method::GET, VLAN_FIND_PATH, options.timeout);
        let body = self.http.send(request).await?;
        let vlans = Self::decode(&body)?;

        debug!("Listed {} VLANs", vlans.len());
        Ok(vlans)
    }
}
