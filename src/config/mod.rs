//! Configuration management for the Pantheon CLI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::Session;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pantheon machine token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_token: Option<String>,

    /// Session obtained from the machine token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".pantheon").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Machine tokens are credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Check if the session is missing, expired, or will expire soon
    pub fn is_session_expired(&self) -> bool {
        self.session.as_ref().is_none_or(Session::is_expired)
    }

    /// Validate that a machine token is present
    pub fn validate_auth(&self) -> Result<()> {
        if self.machine_token.is_none() {
            return Err(ConfigError::MissingMachineToken.into());
        }
        Ok(())
    }
}
