//! Network API clients
//!
//! One implementation per server API version, both behind
//! `NetworkApiClientTrait`. `connect` picks the right one from a
//! `ClientConfig`.

pub mod json;
pub mod xml;

pub use json::JsonClient;
pub use xml::XmlClient;

use crate::auth::{HeaderCredentials, RequestAuthenticator};
use crate::common::build_transport;
use crate::config::ClientConfig;
use crate::error::NetworkApiError;
use crate::models::ApiVersion;
use crate::network_trait::NetworkApiClientTrait;
use std::sync::Arc;
use tracing::debug;

/// Build the client matching `config.api_version`
///
/// The transport is built once, with the configured default timeout, and
/// handed to the client as is.
///
/// # Returns
/// * `Ok(Box<dyn NetworkApiClientTrait>)` - Ready client; no connection is opened yet
/// * `Err(NetworkApiError)` - Invalid endpoint, inconsistent credentials, or
///   transport setup failure
pub fn connect(
    config: &ClientConfig,
) -> Result<Box<dyn NetworkApiClientTrait>, NetworkApiError> {
    let auth = config.credentials_pair()?.map(|(username, password)| {
        Arc::new(HeaderCredentials::new(username, password)) as Arc<dyn RequestAuthenticator>
    });
    debug!(
        "Connecting to Network API at {} ({:?}, authenticated: {})",
        config.endpoint,
        config.api_version,
        auth.is_some()
    );

    match config.api_version {
        ApiVersion::Json => {
            let transport = build_transport(config.timeout)?;
            let client = JsonClient::from_transport(&config.endpoint, auth, transport)?;
            Ok(Box::new(client))
        }
        ApiVersion::Xml => {
            let auth = auth.ok_or_else(|| {
                NetworkApiError::InvalidConfig(
                    "XML API requires username and password".to_string(),
                )
            })?;
            let transport = build_transport(config.timeout)?;
            let client = XmlClient::from_transport(&config.endpoint, auth, transport)?;
            Ok(Box::new(client))
        }
    }
}
