//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Pantheon Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            return Ok(());
        }
    };

    if config.machine_token.is_some() {
        println!("{} Machine token configured", "✓".green());
    } else {
        println!("{} Machine token not configured", "✗".red());
        println!("  → Run 'pantheon auth login <MACHINE_TOKEN>'");
    }

    match &config.session {
        Some(session) if !session.is_expired() => {
            let remaining = session.expires_at.signed_duration_since(chrono::Utc::now());
            println!(
                "{} Session active for user {} (expires in {}h {}m)",
                "✓".green(),
                session.user_id.bold(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        Some(_) => println!(
            "{} Session expired (will renew on next command)",
            "⚠".yellow()
        ),
        None => println!("{} No session", "✗".red()),
    }

    if let Some(host) = &opts.api_host {
        println!("API host: {}", host.cyan());
    }

    Ok(())
}
