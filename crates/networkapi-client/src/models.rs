//! Network API models
//!
//! `Vlan` is the record both server versions return. The XML wire shape lives
//! next to the XML client; only the JSON shape is expressed here.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A VLAN definition as reported by the server
///
/// Fields the server leaves out decode to their zero value instead of failing
/// the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    /// Environment the VLAN belongs to
    #[serde(default, alias = "Environment")]
    pub environment: i64,
    /// 802.1Q VLAN number
    #[serde(default, alias = "Number")]
    pub number: i64,
    /// IPv4 network in CIDR form, e.g. "10.10.10.0/24"
    #[serde(default, alias = "Network")]
    pub network: String,
}

/// Filter and per-call settings for `list_vlans`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVlansOptions {
    /// Name substring to search for; empty means unfiltered
    pub name: String,
    /// Deadline for this call only; `None` falls back to the client default
    pub timeout: Option<Duration>,
}

impl ListVlansOptions {
    /// Options filtering on a VLAN name substring
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set a deadline for this call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Server API version, which decides method, path, and body encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// `GET /vlan/find`, JSON array response
    #[default]
    Json,
    /// `POST /vlan/find/` with an XML search document, XML response
    Xml,
}

impl std::str::FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(format!(
                "unknown API version {:?} (expected \"json\" or \"xml\")",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vlan_ignores_unknown_fields() {
        let json = r#"{"environment": 3, "number": 42, "network": "10.10.10.0/24", "id": 9}"#;
        let vlan: Vlan = serde_json::from_str(json).unwrap();
        assert_eq!(
            vlan,
            Vlan { environment: 3, number: 42, network: "10.10.10.0/24".to_string() }
        );
    }

    #[test]
    fn test_vlan_missing_fields_default_to_zero() {
        let vlan: Vlan = serde_json::from_str(r#"{"environment": 1, "number": 2}"#).unwrap();
        assert_eq!(vlan, Vlan { environment: 1, number: 2, network: String::new() });

        let vlan: Vlan = serde_json::from_str("{}").unwrap();
        assert_eq!(vlan, Vlan::default());
    }

    #[test]
    fn test_vlan_accepts_capitalized_keys() {
        let json = r#"{"Environment": 1, "Number": 2, "Network": "192.168.0.0/16"}"#;
        let vlan: Vlan = serde_json::from_str(json).unwrap();
        assert_eq!(vlan.environment, 1);
        assert_eq!(vlan.number, 2);
        assert_eq!(vlan.network, "192.168.0.0/16");
    }

    #[test]
    fn test_options_builder() {
        let opts = ListVlansOptions::with_name("vlan_name").timeout(Duration::from_secs(5));
        assert_eq!(opts.name, "vlan_name");
        assert_eq!(opts.timeout, Some(Duration::from_secs(5)));
        assert_eq!(ListVlansOptions::default().name, "");
    }

    #[test]
    fn test_api_version_parsing() {
        assert_eq!("json".parse::<ApiVersion>(), Ok(ApiVersion::Json));
        assert_eq!(" XML ".parse::<ApiVersion>(), Ok(ApiVersion::Xml));
        assert!("soap".parse::<ApiVersion>().is_err());
        let v: ApiVersion = serde_json::from_str("\"xml\"").unwrap();
        assert_eq!(v, ApiVersion::Xml);
    }
}
