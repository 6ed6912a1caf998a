//! Auth command implementations

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::build_client;
use crate::client::PantheonApi;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the auth login command
pub async fn login(machine_token: String, opts: &GlobalOptions) -> Result<()> {
    let client = build_client(opts)?;

    println!("{}", "Authenticating...".cyan());
    let session = client.authenticate(&machine_token).await?;

    // Keep the rest of an existing config
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(e) => return Err(e),
    };

    let user_id = session.user_id.clone();
    config.machine_token = Some(machine_token);
    config.session = Some(session);
    config.save_at(opts.config_ref())?;

    println!("{} Logged in as user {}", "✓".green(), user_id.bold());
    Ok(())
}

/// Run the auth logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.machine_token = None;
    config.session = None;
    config.save_at(opts.config_ref())?;

    println!("{} Logged out", "✓".green());
    Ok(())
}
