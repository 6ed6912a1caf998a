//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod org;
pub mod site;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Pantheon CLI - organizations, sites and domains on the Pantheon platform
#[derive(Parser, Debug)]
#[command(name = "pantheon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "PANTHEON_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "PANTHEON_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "PANTHEON_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PANTHEON_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage authentication
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Organizations you belong to
    #[command(subcommand)]
    Org(OrgCommands),

    /// Sites and their domains
    #[command(subcommand)]
    Site(SiteCommands),
}

/// Authentication subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Exchange a machine token for a session and save both
    Login {
        /// Machine token from the Pantheon dashboard
        #[arg(env = "PANTHEON_MACHINE_TOKEN", hide_env_values = true)]
        machine_token: String,
    },

    /// Forget the saved machine token and session
    Logout,
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations you are a member of
    List,

    /// List sites belonging to an organization
    Sites {
        /// Organization ID
        org_id: String,
    },
}

/// Site subcommands
#[derive(Subcommand, Debug)]
pub enum SiteCommands {
    /// List sites you are a member of
    List,

    /// List domains of a site environment
    Domains {
        /// Site ID
        site_id: String,

        /// Environment name (dev, test, live, or a multidev)
        #[arg(default_value = "live")]
        env: String,
    },
}
