//! Mock session for testing
//!
//! Returns a fixed user ID or a forced failure, and counts how often it was
//! asked.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::session::AuthSession;
use crate::error::{ConfigError, Result};

/// Mock session for path construction tests.
///
/// # Example
/// ```ignore
/// let session = MockSession::with_user("user-1");
/// let path = SiteList::new().path(&Method::GET, &session)?;
/// assert_eq!(session.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSession {
    /// User ID to return; `None` forces a failure
    user_id: Option<String>,
    /// Number of `get_user` calls
    calls: AtomicUsize,
}

impl MockSession {
    pub fn with_user(user_id: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthSession for MockSession {
    fn get_user(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user_id
            .clone()
            .ok_or_else(|| ConfigError::MissingSession.into())
    }
}
