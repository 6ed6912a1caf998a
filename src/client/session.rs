//! Authenticated sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Anything that can name the currently authenticated user.
pub trait AuthSession: Send + Sync {
    /// The current user's ID, or an error if no valid session exists.
    fn get_user(&self) -> Result<String>;
}

/// A session obtained by exchanging a machine token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session token sent as the bearer credential
    pub token: String,

    /// ID of the user the session belongs to
    pub user_id: String,

    /// Session expiration time
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session is expired or will expire soon (within 5 minutes)
    pub fn is_expired(&self) -> bool {
        let buffer = chrono::Duration::minutes(5);
        self.expires_at - buffer < Utc::now()
    }
}

impl AuthSession for Session {
    fn get_user(&self) -> Result<String> {
        if self.is_expired() {
            log::warn!("Session for user {} has expired", self.user_id);
            return Err(ConfigError::SessionExpired.into());
        }
        if self.user_id.is_empty() {
            return Err(ConfigError::Invalid("Session has no user ID".to_string()).into());
        }
        Ok(self.user_id.clone())
    }
}
