//! Organization models

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::site::SiteDetails;
use crate::client::resource::{self, Resource};
use crate::client::session::AuthSession;
use crate::error::ResourceError;

/// Organization membership of the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Org {
    #[serde(default)]
    pub archived: bool,

    /// Membership ID
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub key: String,

    /// Membership role (e.g. "admin", "team_member")
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub organization: OrgDetails,

    #[serde(default)]
    pub site_id: String,

    #[serde(default)]
    pub user_id: String,
}

/// Organization referenced by a membership
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgDetails {
    #[serde(default)]
    pub profile: OrgProfile,

    /// Organization ID
    #[serde(default)]
    pub id: String,
}

/// Organization profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgProfile {
    #[serde(default)]
    pub machine_name: String,

    #[serde(default)]
    pub change_service_url: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email_domain: String,

    #[serde(default)]
    pub org_logo_width: u32,

    #[serde(default)]
    pub org_logo_height: u32,

    #[serde(default)]
    pub base_domain: String,

    #[serde(default)]
    pub billing_url: String,

    #[serde(default)]
    pub terms_of_service: String,

    /// Logo URL
    #[serde(default)]
    pub org_logo: String,
}

/// Organizations the current user is a member of.
///
/// The user is taken from the session used for the request.
#[derive(Debug, Clone, Default)]
pub struct OrgList {
    pub orgs: Vec<Org>,
}

impl OrgList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resource for OrgList {
    fn path(&self, _method: &Method, session: &dyn AuthSession) -> Result<String, ResourceError> {
        let user_id = resource::resolve_user(session)?;
        Ok(format!("/users/{}/memberships/organizations", user_id))
    }

    fn json(&self) -> Result<Vec<u8>, ResourceError> {
        resource::encode_records(&self.orgs)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), ResourceError> {
        self.orgs = resource::decode_records(data)?;
        log::debug!("Decoded {} organizations", self.orgs.len());
        Ok(())
    }
}

/// Site membership of an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSite {
    #[serde(default)]
    pub archived: bool,

    /// Membership ID
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub role: String,

    pub site: SiteDetails,

    /// Owning organization ID
    #[serde(default, rename = "organization_id")]
    pub organization: String,

    #[serde(default)]
    pub site_id: String,
}

/// Sites belonging to one organization
#[derive(Debug, Clone, Default)]
pub struct OrgSiteList {
    /// Organization ID the list is scoped to
    pub organization: String,
    pub org_sites: Vec<OrgSite>,
}

impl OrgSiteList {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            org_sites: Vec::new(),
        }
    }
}

impl Resource for OrgSiteList {
    fn path(&self, _method: &Method, _session: &dyn AuthSession) -> Result<String, ResourceError> {
        Ok(format!(
            "/organizations/{}/memberships/sites",
            self.organization
        ))
    }

    fn json(&self) -> Result<Vec<u8>, ResourceError> {
        resource::encode_records(&self.org_sites)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), ResourceError> {
        self.org_sites = resource::decode_records(data)?;
        log::debug!(
            "Decoded {} sites for organization {}",
            self.org_sites.len(),
            self.organization
        );
        Ok(())
    }
}
