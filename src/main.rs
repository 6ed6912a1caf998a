//! Pantheon CLI - organizations, sites and domains on the Pantheon platform

use clap::Parser;

use pantheon::cli::{self, AuthCommands, Cli, Commands, GlobalOptions, OrgCommands, SiteCommands};
use pantheon::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Auth(auth_cmd) => match auth_cmd {
            AuthCommands::Login { machine_token } => cli::auth::login(machine_token, &opts).await,
            AuthCommands::Logout => cli::auth::logout(&opts),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("pantheon version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List => cli::org::list(&opts).await,
            OrgCommands::Sites { org_id } => cli::org::sites(&org_id, &opts).await,
        },
        Commands::Site(site_cmd) => match site_cmd {
            SiteCommands::List => cli::site::list(&opts).await,
            SiteCommands::Domains { site_id, env } => {
                cli::site::domains(&site_id, &env, &opts).await
            }
        },
    }
}

/// Log to stderr; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
