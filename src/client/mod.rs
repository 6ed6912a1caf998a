//! Pantheon API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pantheon;
pub mod resource;
pub mod session;

pub use models::{Domain, Org, OrgSite, Site};
pub use pantheon::{API_BASE_URL, PantheonClient};
pub use resource::Resource;
pub use session::{AuthSession, Session};

/// Pantheon API operations
#[async_trait]
pub trait PantheonApi: Send + Sync {
    /// Exchange a machine token for a session
    async fn authenticate(&self, machine_token: &str) -> Result<Session>;

    /// List organizations the current user belongs to
    async fn list_orgs(&self) -> Result<Vec<Org>>;

    /// List sites belonging to an organization
    async fn list_org_sites(&self, org_id: &str) -> Result<Vec<OrgSite>>;

    /// List sites the current user belongs to
    async fn list_sites(&self) -> Result<Vec<Site>>;

    /// List domains of one site environment
    async fn list_site_domains(&self, site_id: &str, env: &str) -> Result<Vec<Domain>>;
}
