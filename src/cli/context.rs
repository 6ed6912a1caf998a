//! Command execution context
//!
//! Loads configuration, makes sure a live session exists, and builds the
//! API client every listing command needs.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{PantheonApi, PantheonClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration, with a live session
    pub config: Config,
    /// API client carrying the session
    pub client: PantheonClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// An expired or missing session is renewed from the saved machine token
    /// and written back to the config file.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.validate_auth()?;

        let client = build_client(opts)?;

        if config.is_session_expired() {
            log::debug!("Session missing or expired, renewing from machine token");
            let machine_token = config
                .machine_token
                .as_deref()
                .ok_or(ConfigError::MissingMachineToken)?;
            let session = client.authenticate(machine_token).await?;

            config.session = Some(session);
            config.save_at(opts.config_ref())?;
        }

        let session = config.session.clone().ok_or(ConfigError::MissingSession)?;

        Ok(Self {
            config,
            client: client.with_session(session),
            format: opts.format,
        })
    }
}

/// Build a client for the configured API host
pub fn build_client(opts: &GlobalOptions) -> Result<PantheonClient> {
    let client = PantheonClient::new()?;
    Ok(match opts.api_host_ref() {
        Some(host) => client.with_base_url(host),
        None => client,
    })
}
