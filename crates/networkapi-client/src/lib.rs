//! Network API Client
//!
//! A Rust client library for listing VLAN definitions from a Network API server.
//! Two server API versions are supported behind one trait:
//!
//! - **JSON**: `GET /vlan/find`, unauthenticated, JSON array response
//! - **XML**: `POST /vlan/find/` with a search document, header authentication,
//!   XML response
//!
//! # Example
//!
//! ```no_run
//! use networkapi_client::{ListVlansOptions, NetworkApiClientTrait, XmlClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = XmlClient::new("http://networkapi:8080", "admin", "secret")?;
//!
//! let options = ListVlansOptions::with_name("prod").timeout(Duration::from_secs(10));
//! for vlan in client.list_vlans(&options).await? {
//!     println!("env {} vlan {} net {}", vlan.environment, vlan.number, vlan.network);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The variant can also be chosen at runtime from a [`ClientConfig`]:
//!
//! ```no_run
//! use networkapi_client::{ClientConfig, ListVlansOptions, NetworkApiClientTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientConfig::from_env()?.connect()?;
//! let vlans = client.list_vlans(&ListVlansOptions::default()).await?;
//! println!("{} VLANs", vlans.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod network_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use auth::{HeaderCredentials, RequestAuthenticator};
pub use client::{JsonClient, XmlClient, connect};
pub use common::{Endpoint, USER_AGENT};
pub use config::ClientConfig;
pub use error::{DecodeError, NetworkApiError};
pub use models::*;
pub use network_trait::NetworkApiClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetworkApiClient;
