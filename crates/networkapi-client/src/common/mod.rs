//! Common utilities for the Network API client
//!
//! Provides the transport wrapper shared by both server API versions.

pub mod endpoint;

pub use endpoint::Endpoint;

use crate::auth::RequestAuthenticator;
use crate::error::NetworkApiError;
use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Identifying `User-Agent` sent with every request
pub const USER_AGENT: &str = concat!("networkapi-client/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const TCP_KEEPALIVE: Duration = Duration::from_secs(30);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Build the default pooled transport
///
/// No overall request timeout is set unless `timeout` is given; per-call
/// deadlines go on the request instead. Proxy settings come from the
/// environment (reqwest default).
pub fn build_transport(timeout: Option<Duration>) -> Result<Client, NetworkApiError> {
    let mut builder = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .tcp_keepalive(TCP_KEEPALIVE)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(NetworkApiError::Transport)
}

/// HTTP client wrapper with endpoint and optional authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: Endpoint,
    auth: Option<Arc<dyn RequestAuthenticator>>,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(
        client: Client,
        endpoint: Endpoint,
        auth: Option<Arc<dyn RequestAuthenticator>>,
    ) -> Self {
        Self {
            client,
            endpoint,
            auth,
        }
    }

    /// Get the endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Replace the underlying transport
    pub fn set_client(&mut self, client: Client) {
        self.client = client;
    }

    /// Build a request with the identifying header and authentication applied
    pub fn request(&self, method: Method, path: &str, timeout: Option<Duration>) -> RequestBuilder {
        let url = self.endpoint.join(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if let Some(auth) = &self.auth {
            request = auth.authenticate(request);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        request
    }

    /// Send a request, check the status, and read the whole body
    ///
    /// The response is consumed on every path, so the connection goes back to
    /// the pool (or is dropped) before the caller starts decoding.
    pub async fn send(&self, request: RequestBuilder) -> Result<Bytes, NetworkApiError> {
        let response = request.send().await?;

        let status = response.status();
        if !(200..400).contains(&status.as_u16()) {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed: {} - {}", status, body);
            return Err(NetworkApiError::RequestFailed { status, body });
        }

        let body = response.bytes().await?;
        debug!("Received {} ({} bytes)", status, body.len());
        Ok(body)
    }
}
