//! Pantheon API data models
//!
//! Resource records and the lists that group them. Each list implements
//! [`Resource`](crate::client::Resource).

mod domain;
pub(crate) mod flex;
mod org;
pub(crate) mod site;

pub use domain::{Domain, SiteDomainList};
pub use flex::FlexInt;
pub use org::{Org, OrgDetails, OrgList, OrgProfile, OrgSite, OrgSiteList};
pub use site::{LastCodePush, Product, Site, SiteDetails, SiteList, Upstream};
