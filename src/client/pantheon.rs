//! Pantheon API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::{Deserialize, Serialize};

use super::models::{
    Domain, FlexInt, Org, OrgList, OrgSite, OrgSiteList, Site, SiteDomainList, SiteList,
};
use super::{PantheonApi, Resource, Session};
use crate::error::{ApiError, ConfigError, Result};

/// Pantheon API base URL
pub const API_BASE_URL: &str = "https://terminus.pantheon.io/api";

/// Client name sent when exchanging a machine token
const CLIENT_NAME: &str = "terminus";

/// Pantheon API client
pub struct PantheonClient {
    http: HttpClient,
    base_url: String,
    session: Option<Session>,
}

impl PantheonClient {
    /// Create a new Pantheon API client
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("pantheon-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            session: None,
        })
    }

    /// Point the client at a different API host (testing, staging).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Fetch any resource list and populate it from the response.
    ///
    /// The path is resolved before anything is sent, so session errors never
    /// reach the network.
    pub async fn fetch<R: Resource>(&self, resource: &mut R) -> Result<()> {
        let session = self.session.as_ref().ok_or(ConfigError::MissingSession)?;
        let path = resource.path(&Method::GET, session)?;
        let url = format!("{}{}", self.base_url, path);

        log::debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", session.token))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body).into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        log::debug!("Received {} bytes from {}", body.len(), path);
        resource.unmarshal(&body)?;
        Ok(())
    }
}

/// Map a non-success status to an API error
fn status_error(status: StatusCode, body: String) -> ApiError {
    let body_or = |fallback: String| {
        if body.is_empty() {
            fallback
        } else {
            body.clone()
        }
    };
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(body_or("Resource not found".to_string())),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(body_or("Bad request".to_string()))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(body_or(format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

#[async_trait]
impl PantheonApi for PantheonClient {
    async fn authenticate(&self, machine_token: &str) -> Result<Session> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            machine_token: &'a str,
            client: &'a str,
        }

        #[derive(Deserialize)]
        struct LoginResponse {
            session: String,
            expires_at: FlexInt,
            user_id: String,
        }

        let url = format!("{}/authorize/machine-token", self.base_url);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                machine_token,
                client: CLIENT_NAME,
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized.into());
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status, response_text).into());
        }

        let login: LoginResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        let expires_at = chrono::DateTime::from_timestamp(i64::from(login.expires_at), 0)
            .ok_or_else(|| {
                ApiError::InvalidResponse("Invalid session expiration timestamp".to_string())
            })?;

        Ok(Session {
            token: login.session,
            user_id: login.user_id,
            expires_at,
        })
    }

    async fn list_orgs(&self) -> Result<Vec<Org>> {
        let mut list = OrgList::new();
        self.fetch(&mut list).await?;
        Ok(list.orgs)
    }

    async fn list_org_sites(&self, org_id: &str) -> Result<Vec<OrgSite>> {
        let mut list = OrgSiteList::new(org_id);
        self.fetch(&mut list).await?;
        Ok(list.org_sites)
    }

    async fn list_sites(&self) -> Result<Vec<Site>> {
        let mut list = SiteList::new();
        self.fetch(&mut list).await?;
        Ok(list.sites)
    }

    async fn list_site_domains(&self, site_id: &str, env: &str) -> Result<Vec<Domain>> {
        let mut list = SiteDomainList::new(site_id, env);
        self.fetch(&mut list).await?;
        Ok(list.domains)
    }
}
