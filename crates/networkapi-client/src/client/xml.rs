//! XML server API version
//!
//! `POST /vlan/find/` with a fixed search document in the body. The server
//! expects every field of the document to be present, so only the name is
//! substituted and everything else keeps its default. The body is announced
//! as `text/plain`, which is what the server accepts.
//!
//! Responses look like:
//!
//! ```xml
//! <networkapi versao="1.0">
//!     <vlan>
//!         <ambiente>3</ambiente>
//!         <num_vlan>42</num_vlan>
//!         <redeipv4><network>10.10.10.0/24</network></redeipv4>
//!     </vlan>
//! </networkapi>
//! ```

use crate::auth::{HeaderCredentials, RequestAuthenticator};
use crate::common::{Endpoint, HttpClient, build_transport};
use crate::error::{DecodeError, NetworkApiError};
use crate::models::{ApiVersion, ListVlansOptions, Vlan};
use crate::network_trait::NetworkApiClientTrait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const VLAN_FIND_PATH: &str = "/vlan/find/";

/// Search window baked into the request document
const START_RECORD: u32 = 0;
const END_RECORD: u32 = 100;

/// Response document: repeated `<vlan>` children of the root
#[derive(Debug, Deserialize)]
struct VlanDocument {
    #[serde(rename = "vlan", default)]
    vlans: Vec<XmlVlan>,
}

/// Missing elements decode to zero values, like the JSON records
#[derive(Debug, Deserialize)]
struct XmlVlan {
    #[serde(default)]
    ambiente: i64,
    #[serde(default)]
    num_vlan: i64,
    #[serde(default)]
    redeipv4: XmlNetwork,
}

#[derive(Debug, Default, Deserialize)]
struct XmlNetwork {
    #[serde(default)]
    network: String,
}

impl From<XmlVlan> for Vlan {
    fn from(vlan: XmlVlan) -> Self {
        Self {
            environment: vlan.ambiente,
            number: vlan.num_vlan,
            network: vlan.redeipv4.network,
        }
    }
}

/// Client for the XML server API version
#[derive(Debug, Clone)]
pub struct XmlClient {
    http: HttpClient,
}

impl XmlClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - Base URL (e.g., "http://networkapi:8080")
    /// * `username` - Sent as `NETWORKAPI_USERNAME`
    /// * `password` - Sent as `NETWORKAPI_PASSWORD`
    pub fn new(endpoint: &str, username: &str, password: &str) -> Result<Self, NetworkApiError> {
        let auth = Arc::new(HeaderCredentials::new(username, password));
        Self::with_authenticator(endpoint, auth)
    }

    /// Create a client with a custom authentication scheme
    pub fn with_authenticator(
        endpoint: &str,
        auth: Arc<dyn RequestAuthenticator>,
    ) -> Result<Self, NetworkApiError> {
        let endpoint = Endpoint::parse(endpoint)?;
        Ok(Self {
            http: HttpClient::new(build_transport(None)?, endpoint, Some(auth)),
        })
    }

    /// Create a client on an already built transport
    ///
    /// No default transport is created, so the caller's pool is the only one.
    pub fn from_transport(
        endpoint: &str,
        auth: Arc<dyn RequestAuthenticator>,
        transport: Client,
    ) -> Result<Self, NetworkApiError> {
        let endpoint = Endpoint::parse(endpoint)?;
        Ok(Self {
            http: HttpClient::new(transport, endpoint, Some(auth)),
        })
    }

    /// Use a caller-supplied transport (custom TLS, default timeout, ...)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http.set_client(client);
        self
    }

    /// Render the search document for a name filter
    pub fn search_body(name: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<networkapi versao="1.0">
    <vlan>
        <iexact>false</iexact>
        <subrede>0</subrede>
        <start_record>{start}</start_record>
        <tipo_rede></tipo_rede>
        <nome>{name}</nome>
        <custom_search></custom_search>
        <numero></numero>
        <ambiente></ambiente>
        <versao>0</versao>
        <end_record>{end}</end_record>
        <rede></rede>
        <asorting_cols></asorting_cols>
        <acl></acl>
        <searchable_columns></searchable_columns>
    </vlan>
</networkapi>
"#,
            start = START_RECORD,
            name = quick_xml::escape::escape(name),
            end = END_RECORD,
        )
    }

    /// Decode an XML VLAN document
    pub fn decode(body: &[u8]) -> Result<Vec<Vlan>, DecodeError> {
        let document: VlanDocument = quick_xml::de::from_reader(body)?;
        Ok(document.vlans.into_iter().map(Vlan::from).collect())
    }
}

#[async_trait::async_trait]
impl NetworkApiClientTrait for XmlClient {
    fn endpoint(&self) -> &Endpoint {
        self.http.endpoint()
    }

    fn api_version(&self) -> ApiVersion {
        ApiVersion::Xml
    }

    async fn list_vlans(
        &self,
        options: &ListVlansOptions,
    ) -> Result<Vec<Vlan>, NetworkApiError> {
        debug!("Searching VLANs with name filter {:?}", options.name);

        let request = self
            .http
            .request(Method::POST, VLAN_FIND_PATH, options.timeout)
            .header(CONTENT_TYPE, "text/plain")
            .body(Self::search_body(&options.name));
        let body = self.http.send(request).await?;
        let vlans = Self::decode(&body)?;

        debug!("Listed {} VLANs", vlans.len());
        Ok(vlans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_body_fields() {
        let body = XmlClient::search_body("vlan_name");
        for field in [
            "<networkapi versao=\"1.0\">",
            "<iexact>false</iexact>",
            "<subrede>0</subrede>",
            "<start_record>0</start_record>",
            "<tipo_rede></tipo_rede>",
            "<nome>vlan_name</nome>",
            "<custom_search></custom_search>",
            "<numero></numero>",
            "<ambiente></ambiente>",
            "<versao>0</versao>",
            "<end_record>100</end_record>",
            "<rede></rede>",
            "<asorting_cols></asorting_cols>",
            "<acl></acl>",
            "<searchable_columns></searchable_columns>",
        ] {
            assert!(body.contains(field), "missing {} in:\n{}", field, body);
        }
    }

    #[test]
    fn test_search_body_escapes_name() {
        let body = XmlClient::search_body("a<b&c");
        assert!(body.contains("<nome>a&lt;b&amp;c</nome>"));
    }

    #[test]
    fn test_search_body_empty_name() {
        assert!(XmlClient::search_body("").contains("<nome></nome>"));
    }

    #[test]
    fn test_decode_multiple_vlans_in_order() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<networkapi versao="1.0">
    <vlan>
        <id>7</id>
        <nome>first</nome>
        <ambiente>1</ambiente>
        <num_vlan>100</num_vlan>
        <redeipv4><id>3</id><network>10.0.0.0/24</network></redeipv4>
    </vlan>
    <vlan>
        <ambiente>2</ambiente>
        <num_vlan>200</num_vlan>
        <redeipv4><network>10.0.1.0/24</network></redeipv4>
    </vlan>
</networkapi>"#;
        let vlans = XmlClient::decode(body).unwrap();
        assert_eq!(
            vlans,
            vec![
                Vlan { environment: 1, number: 100, network: "10.0.0.0/24".to_string() },
                Vlan { environment: 2, number: 200, network: "10.0.1.0/24".to_string() },
            ]
        );
    }

    #[test]
    fn test_decode_no_vlans() {
        let vlans = XmlClient::decode(br#"<networkapi versao="1.0"></networkapi>"#).unwrap();
        assert!(vlans.is_empty());
    }

    #[test]
    fn test_decode_vlan_with_missing_elements() {
        let body = br#"<networkapi versao="1.0">
            <vlan>
                <ambiente>4</ambiente>
                <num_vlan>400</num_vlan>
            </vlan>
            <vlan>
                <num_vlan>401</num_vlan>
                <redeipv4><id>1</id></redeipv4>
            </vlan>
        </networkapi>"#;
        let vlans = XmlClient::decode(body).unwrap();
        assert_eq!(
            vlans,
            vec![
                Vlan { environment: 4, number: 400, network: String::new() },
                Vlan { environment: 0, number: 401, network: String::new() },
            ]
        );
    }

    #[test]
    fn test_decode_rejects_non_numeric_vlan() {
        let body = br#"<networkapi>
            <vlan>
                <ambiente>1</ambiente>
                <num_vlan>abc</num_vlan>
                <redeipv4><network>10.0.0.0/24</network></redeipv4>
            </vlan>
        </networkapi>"#;
        assert!(matches!(XmlClient::decode(body), Err(DecodeError::Xml(_))));
    }
}
