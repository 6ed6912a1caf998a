//! Domain models

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::resource::{self, Resource};
use crate::client::session::AuthSession;
use crate::error::ResourceError;

/// Domain attached to a site environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub dns_zone_name: String,

    #[serde(default)]
    pub domain_lookup_rax: u64,

    #[serde(default)]
    pub domain_lookup_usc1: u64,

    /// Environment name (e.g. "dev", "live")
    #[serde(default)]
    pub environment: String,

    #[serde(default)]
    pub site_id: String,

    /// Domain type (e.g. "platform", "custom")
    #[serde(default, rename = "type")]
    pub domain_type: String,

    /// The domain name itself
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub status_message: String,

    #[serde(default)]
    pub deletable: bool,
}

/// Domains of one site environment
#[derive(Debug, Clone, Default)]
pub struct SiteDomainList {
    pub site_id: String,
    pub environment: String,
    pub domains: Vec<Domain>,
}

impl SiteDomainList {
    pub fn new(site_id: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            environment: environment.into(),
            domains: Vec::new(),
        }
    }
}

impl Resource for SiteDomainList {
    fn path(&self, _method: &Method, _session: &dyn AuthSession) -> Result<String, ResourceError> {
        Ok(format!(
            "/sites/{}/environments/{}/domains",
            self.site_id, self.environment
        ))
    }

    fn json(&self) -> Result<Vec<u8>, ResourceError> {
        resource::encode_records(&self.domains)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), ResourceError> {
        self.domains = resource::decode_records(data)?;
        log::debug!(
            "Decoded {} domains for {}.{}",
            self.domains.len(),
            self.environment,
            self.site_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockSession;
    use serde_json::{Value, json};

    fn domain_fixture() -> Value {
        json!({
            "dns_zone_name": "pantheonsite.io",
            "domain_lookup_rax": 0,
            "domain_lookup_usc1": 18446744073709551615u64,
            "environment": "live",
            "site_id": "abc123",
            "type": "platform",
            "id": "live-example.pantheonsite.io",
            "key": "live-example.pantheonsite.io",
            "status": "okay",
            "status_message": "Launched",
            "deletable": false
        })
    }

    #[test]
    fn test_path_from_scope() {
        let session = MockSession::failing();
        let path = SiteDomainList::new("abc123", "live")
            .path(&Method::GET, &session)
            .unwrap();

        assert_eq!(path, "/sites/abc123/environments/live/domains");
        assert_eq!(session.calls(), 0);
    }

    #[test]
    fn test_unmarshal_domains() {
        let mut list = SiteDomainList::new("abc123", "live");
        list.unmarshal(&serde_json::to_vec(&json!([domain_fixture()])).unwrap())
            .unwrap();

        let domain = &list.domains[0];
        assert_eq!(domain.domain_type, "platform");
        assert_eq!(domain.domain_lookup_usc1, u64::MAX);
        assert_eq!(domain.status_message, "Launched");
    }

    #[test]
    fn test_json_round_trip() {
        let input = json!([domain_fixture()]);

        let mut list = SiteDomainList::new("abc123", "live");
        list.unmarshal(&serde_json::to_vec(&input).unwrap()).unwrap();
        let output: Value = serde_json::from_slice(&list.json().unwrap()).unwrap();

        assert_eq!(output, input);
    }

    #[test]
    fn test_json_of_empty_list() {
        let list = SiteDomainList::new("abc123", "live");
        assert_eq!(list.json().unwrap(), b"[]");
    }

    #[test]
    fn test_unmarshal_rejects_negative_lookup() {
        let mut fixture = domain_fixture();
        fixture["domain_lookup_rax"] = json!(-1);

        let mut list = SiteDomainList::new("abc123", "live");
        let err = list
            .unmarshal(&serde_json::to_vec(&json!([fixture])).unwrap())
            .unwrap_err();

        assert!(matches!(err, ResourceError::Decode { index: Some(0), .. }));
    }
}
