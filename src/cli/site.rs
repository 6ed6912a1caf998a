//! Site command implementations

use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{Domain, PantheonApi, Site};
use crate::error::Result;
use crate::output;

/// Site for table display
#[derive(Tabled)]
struct SiteDisplay {
    #[tabled(rename = "SITE ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FRAMEWORK")]
    framework: String,
    #[tabled(rename = "PHP")]
    php_version: String,
    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<Site> for SiteDisplay {
    fn from(site: Site) -> Self {
        Self {
            id: site.site.id,
            name: site.site.name,
            framework: site.site.framework,
            php_version: php_label(i64::from(site.site.php_version)),
            role: site.role,
        }
    }
}

/// Render the API's dotless PHP version (74) as "7.4"
fn php_label(version: i64) -> String {
    if version >= 10 {
        format!("{}.{}", version / 10, version % 10)
    } else {
        version.to_string()
    }
}

/// Domain for table display
#[derive(Tabled)]
struct DomainDisplay {
    #[tabled(rename = "DOMAIN")]
    id: String,
    #[tabled(rename = "TYPE")]
    domain_type: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "DELETABLE")]
    deletable: bool,
}

impl From<Domain> for DomainDisplay {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.id,
            domain_type: domain.domain_type,
            status: domain.status,
            deletable: domain.deletable,
        }
    }
}

/// Run the site list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let sites = ctx.client.list_sites().await?;
    output::print_records::<_, SiteDisplay>(sites, ctx.format)
}

/// Run the site domains command
pub async fn domains(site_id: &str, env: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let domains = ctx.client.list_site_domains(site_id, env).await?;
    output::print_records::<_, DomainDisplay>(domains, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_php_label() {
        assert_eq!(php_label(74), "7.4");
        assert_eq!(php_label(81), "8.1");
        assert_eq!(php_label(7), "7");
    }
}
