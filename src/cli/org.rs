//! Organization command implementations

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{Org, OrgSite, PantheonApi};
use crate::error::Result;
use crate::output;

/// Organization for table display
#[derive(Tabled)]
struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "MACHINE NAME")]
    machine_name: String,
    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<Org> for OrgDisplay {
    fn from(org: Org) -> Self {
        Self {
            id: org.organization.id,
            name: org.organization.profile.name,
            machine_name: org.organization.profile.machine_name,
            role: org.role,
        }
    }
}

/// Organization site for table display
#[derive(Tabled)]
struct OrgSiteDisplay {
    #[tabled(rename = "SITE ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FRAMEWORK")]
    framework: String,
    #[tabled(rename = "PLAN")]
    service_level: String,
    #[tabled(rename = "FROZEN")]
    frozen: bool,
}

impl From<OrgSite> for OrgSiteDisplay {
    fn from(org_site: OrgSite) -> Self {
        let site = org_site.site;
        Self {
            id: site.id,
            name: site.name,
            framework: site.framework,
            service_level: site.service_level,
            frozen: site.frozen,
        }
    }
}

/// Run the org list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let orgs = ctx.client.list_orgs().await?;
    output::print_records::<_, OrgDisplay>(orgs, ctx.format)
}

/// Run the org sites command
pub async fn sites(org_id: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let org_sites = ctx.client.list_org_sites(org_id).await?;
    output::print_records::<_, OrgSiteDisplay>(org_sites, ctx.format)
}
