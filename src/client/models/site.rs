//! Site models

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::FlexInt;
use crate::client::resource::{self, Resource};
use crate::client::session::AuthSession;
use crate::error::ResourceError;

/// Deployed site details, shared by user and organization memberships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteDetails {
    /// Creation time (Unix seconds, number or string on the wire)
    pub created: FlexInt,

    #[serde(default)]
    pub created_by_user_id: String,

    /// Framework name (e.g. "drupal8", "wordpress")
    #[serde(default)]
    pub framework: String,

    #[serde(default)]
    pub frozen: bool,

    #[serde(default)]
    pub id: String,

    /// Most recent code push, `null` for sites that never received one
    #[serde(default)]
    pub last_code_push: Option<LastCodePush>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub owner: String,

    /// PHP version without the dot (e.g. 74 for PHP 7.4)
    pub php_version: FlexInt,

    #[serde(default)]
    pub preferred_zone: String,

    #[serde(default)]
    pub product: Product,

    #[serde(default)]
    pub product_id: String,

    /// Service level (e.g. "basic", "performance_small")
    #[serde(default)]
    pub service_level: String,

    #[serde(default)]
    pub upstream: Upstream,
}

/// Most recent code push
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LastCodePush {
    #[serde(default)]
    pub timestamp: String,

    /// Pusher identifier. Its shape is not fixed by the API, so it is kept as-is.
    #[serde(default)]
    pub user_uuid: serde_json::Value,
}

/// Product (upstream template) a site was created from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub longname: String,
}

/// Upstream repository a site tracks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Upstream {
    #[serde(default)]
    pub branch: String,

    #[serde(default)]
    pub product_id: String,

    #[serde(default)]
    pub url: String,
}

/// Site membership of the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub archived: bool,

    /// Membership ID
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub key: String,

    /// Membership role (e.g. "team_member", "owner")
    #[serde(default)]
    pub role: String,

    pub site: SiteDetails,

    #[serde(default)]
    pub site_id: String,

    #[serde(default)]
    pub user_id: String,
}

/// Sites the current user is a member of.
///
/// The user is taken from the session used for the request.
#[derive(Debug, Clone, Default)]
pub struct SiteList {
    pub sites: Vec<Site>,
}

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resource for SiteList {
    fn path(&self, _method: &Method, session: &dyn AuthSession) -> Result<String, ResourceError> {
        let user_id = resource::resolve_user(session)?;
        Ok(format!("/users/{}/memberships/sites", user_id))
    }

    fn json(&self) -> Result<Vec<u8>, ResourceError> {
        resource::encode_records(&self.sites)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), ResourceError> {
        self.sites = resource::decode_records(data)?;
        log::debug!("Decoded {} sites", self.sites.len());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::client::mock::MockSession;
    use serde_json::{Value, json};

    /// A site membership as the API returns it, numeric fields as numbers.
    pub(crate) fn site_fixture() -> Value {
        json!({
            "archived": false,
            "id": "5f3d3c1a-membership",
            "key": "5f3d3c1a",
            "role": "owner",
            "site": {
                "created": 1546300800,
                "created_by_user_id": "user-1",
                "framework": "drupal8",
                "frozen": false,
                "id": "site-1",
                "last_code_push": {
                    "timestamp": "2019-01-02T03:04:05",
                    "user_uuid": null
                },
                "name": "example-site",
                "owner": "user-1",
                "php_version": 72,
                "preferred_zone": "us-central1",
                "product": { "id": "prod-1", "longname": "Drupal 8" },
                "product_id": "prod-1",
                "service_level": "basic",
                "upstream": {
                    "branch": "master",
                    "product_id": "prod-1",
                    "url": "https://github.com/pantheon-systems/drops-8.git"
                }
            },
            "site_id": "site-1",
            "user_id": "user-1"
        })
    }

    #[test]
    fn test_path_resolves_user_once() {
        let session = MockSession::with_user("user-1");
        let path = SiteList::new().path(&Method::GET, &session).unwrap();

        assert_eq!(path, "/users/user-1/memberships/sites");
        assert_eq!(session.calls(), 1);
    }

    #[test]
    fn test_path_fails_without_user() {
        let session = MockSession::failing();
        let err = SiteList::new().path(&Method::GET, &session).unwrap_err();

        assert!(matches!(err, ResourceError::SessionResolution(_)));
        assert_eq!(session.calls(), 1);
    }

    #[test]
    fn test_unmarshal_string_and_number_fields() {
        let mut stringly = site_fixture();
        stringly["site"]["created"] = json!("1546300800");
        stringly["site"]["php_version"] = json!("72");
        let data = serde_json::to_vec(&json!([site_fixture(), stringly])).unwrap();

        let mut list = SiteList::new();
        list.unmarshal(&data).unwrap();

        assert_eq!(list.sites.len(), 2);
        for site in &list.sites {
            assert_eq!(site.site.created.value(), 1546300800);
            assert_eq!(site.site.php_version.value(), 72);
        }
    }

    #[test]
    fn test_unmarshal_keeps_opaque_user_uuid() {
        let mut fixture = site_fixture();
        fixture["site"]["last_code_push"]["user_uuid"] = json!({ "id": "abc", "v": 2 });
        let data = serde_json::to_vec(&json!([fixture])).unwrap();

        let mut list = SiteList::new();
        list.unmarshal(&data).unwrap();

        let push = list.sites[0].site.last_code_push.as_ref().unwrap();
        assert_eq!(push.user_uuid, json!({ "id": "abc", "v": 2 }));
    }

    #[test]
    fn test_unmarshal_without_last_code_push() {
        let mut fixture = site_fixture();
        fixture["site"]["last_code_push"] = Value::Null;
        let data = serde_json::to_vec(&json!([fixture])).unwrap();

        let mut list = SiteList::new();
        list.unmarshal(&data).unwrap();

        assert!(list.sites[0].site.last_code_push.is_none());
    }

    #[test]
    fn test_unmarshal_rejects_empty_php_version() {
        let mut fixture = site_fixture();
        fixture["site"]["php_version"] = json!("");
        let data = serde_json::to_vec(&json!([site_fixture(), fixture])).unwrap();

        let mut list = SiteList::new();
        let err = list.unmarshal(&data).unwrap_err();

        assert!(err.is_malformed_numeric());
        let msg = err.to_string();
        assert!(msg.contains("element 1"));
        assert!(msg.contains("site.php_version"));
    }

    #[test]
    fn test_unmarshal_then_json_is_equivalent() {
        let mut never_pushed = site_fixture();
        never_pushed["site"]["last_code_push"] = Value::Null;
        let input = json!([site_fixture(), never_pushed]);

        let mut list = SiteList::new();
        list.unmarshal(&serde_json::to_vec(&input).unwrap()).unwrap();
        let output: Value = serde_json::from_slice(&list.json().unwrap()).unwrap();

        assert!(output[1]["site"].get("last_code_push").is_some());
        assert_eq!(output, input);
    }

    #[test]
    fn test_unmarshal_replaces_sequence() {
        let mut list = SiteList::new();
        list.unmarshal(&serde_json::to_vec(&json!([site_fixture(), site_fixture()])).unwrap())
            .unwrap();
        list.unmarshal(b"[]").unwrap();

        assert!(list.sites.is_empty());
    }
}
