//! Client configuration
//!
//! `ClientConfig` can be embedded in a host application's own config file
//! (it is `Deserialize`) or loaded from `NETWORKAPI_*` environment variables.
//! The library never reads the environment on its own.

use crate::client;
use crate::error::NetworkApiError;
use crate::models::ApiVersion;
use crate::network_trait::NetworkApiClientTrait;
use serde::{Deserialize, Deserializer};
use std::env;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the base endpoint
pub const ENV_URL: &str = "NETWORKAPI_URL";
/// Environment variable selecting `json` or `xml`
pub const ENV_API_VERSION: &str = "NETWORKAPI_API_VERSION";
/// Environment variable holding the username
pub const ENV_USERNAME: &str = "NETWORKAPI_USERNAME";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "NETWORKAPI_PASSWORD";
/// Environment variable holding the default request timeout in seconds (0 disables)
pub const ENV_TIMEOUT_SECS: &str = "NETWORKAPI_TIMEOUT_SECS";

/// Settings needed to build a Network API client
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL (e.g., "http://networkapi:8080")
    pub endpoint: String,
    /// Server API version to speak
    #[serde(default)]
    pub api_version: ApiVersion,
    /// Username for header authentication
    #[serde(default)]
    pub username: Option<String>,
    /// Password for header authentication
    #[serde(default)]
    pub password: Option<String>,
    /// Default timeout applied to every request; per-call options override it
    #[serde(
        default,
        rename = "timeout_secs",
        deserialize_with = "deserialize_timeout_secs"
    )]
    pub timeout: Option<Duration>,
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<u64>::deserialize(deserializer)?;
    Ok(secs.filter(|s| *s > 0).map(Duration::from_secs))
}

impl ClientConfig {
    /// Unauthenticated JSON configuration with no default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_version: ApiVersion::default(),
            username: None,
            password: None,
            timeout: None,
        }
    }

    /// Set the server API version
    pub fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set username and password
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the default request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `NETWORKAPI_*` environment variables
    pub fn from_env() -> Result<Self, NetworkApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NetworkApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENV_URL).ok_or_else(|| {
            NetworkApiError::InvalidConfig(format!("{} environment variable is required", ENV_URL))
        })?;

        let api_version = match lookup(ENV_API_VERSION) {
            Some(value) => value
                .parse::<ApiVersion>()
                .map_err(|e| {
                    NetworkApiError::InvalidConfig(format!("{}: {}", ENV_API_VERSION, e))
                })?,
            None => ApiVersion::default(),
        };

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|e| {
                    NetworkApiError::InvalidConfig(format!(
                        "{}={:?}: {}",
                        ENV_TIMEOUT_SECS, value, e
                    ))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            endpoint,
            api_version,
            username: lookup(ENV_USERNAME),
            password: lookup(ENV_PASSWORD),
            timeout,
        })
    }

    /// Username/password pair, if configured
    ///
    /// Setting only one of the two is a configuration error.
    pub fn credentials_pair(&self) -> Result<Option<(&str, &str)>, NetworkApiError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                Ok(Some((username.as_str(), password.as_str())))
            }
            (None, None) => Ok(None),
            (Some(_), None) => Err(NetworkApiError::InvalidConfig(
                "username set without password".to_string(),
            )),
            (None, Some(_)) => Err(NetworkApiError::InvalidConfig(
                "password set without username".to_string(),
            )),
        }
    }

    /// Build the client this configuration describes
    pub fn connect(&self) -> Result<Box<dyn NetworkApiClientTrait>, NetworkApiError> {
        client::connect(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_URL, "http://networkapi:8080"),
            (ENV_API_VERSION, "xml"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://networkapi:8080");
        assert_eq!(config.api_version, ApiVersion::Xml);
        assert_eq!(config.credentials_pair().unwrap(), Some(("admin", "s3cret")));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(ENV_URL, "http://localhost:4243")])).unwrap();
        assert_eq!(config, ClientConfig::new("http://localhost:4243"));
    }

    #[test]
    fn test_from_lookup_errors() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[])),
            Err(NetworkApiError::InvalidConfig(_))
        ));
        for (key, value) in [(ENV_API_VERSION, "soap"), (ENV_TIMEOUT_SECS, "soon")] {
            assert!(matches!(
                ClientConfig::from_lookup(lookup_from(&[(ENV_URL, "http://x"), (key, value)])),
                Err(NetworkApiError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_zero_timeout_disables() {
        let vars = [(ENV_URL, "http://x"), (ENV_TIMEOUT_SECS, "0")];
        let config = ClientConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.timeout, None);

        let json = r#"{"endpoint": "http://x", "timeout_secs": 0}"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_deserialize() {
        let config: ClientConfig = serde_json::from_str(
            r#"{
                "endpoint": "http://x",
                "api_version": "xml",
                "username": "u",
                "password": "p",
                "timeout_secs": 5
            }"#,
        )
        .unwrap();
        assert_eq!(config.api_version, ApiVersion::Xml);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_half_credentials_rejected() {
        let mut config = ClientConfig::new("http://x");
        config.username = Some("admin".to_string());
        assert!(matches!(config.credentials_pair(), Err(NetworkApiError::InvalidConfig(_))));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ClientConfig::new("http://x").credentials("admin", "s3cret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
