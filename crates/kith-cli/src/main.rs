//! Kith CLI - one of your people, every day
//!
//! Shows today's contact, reaches out to them, or excludes them for good.

mod cli;
mod commands;
mod error;
mod keyring_store;
mod opener;
mod scheduler;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::common::{resolve_config_path, Context};
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_init, run_config_show};
use crate::commands::exclude::run_exclude;
use crate::commands::excluded::run_excluded;
use crate::commands::reach::run_reach;
use crate::commands::today::run_today;
use crate::error::CliError;

const DEFAULT_LOG_DIRECTIVES: [&str; 2] = ["kith=info", "kith_core=info"];

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(with_default_directives(EnvFilter::from_default_env()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config {
            command: ConfigCommands::Init { force },
        }) => {
            run_config_init(force, &resolve_config_path(cli.config))?;
        }
        command => {
            let ctx = Context::resolve(cli.config, cli.db_path, cli.contacts)?;
            match command {
                Some(Commands::Today { json }) => run_today(json, &ctx).await?,
                Some(Commands::Exclude { json }) => run_exclude(json, &ctx).await?,
                Some(Commands::Reach { action, dry_run }) => {
                    run_reach(action, dry_run, &ctx).await?;
                }
                Some(Commands::Excluded { json }) => run_excluded(json, &ctx).await?,
                Some(Commands::Config {
                    command: ConfigCommands::Show,
                }) => run_config_show(&ctx)?,
                None => run_today(false, &ctx).await?,
                Some(Commands::Completions { .. } | Commands::Config { .. }) => {}
            }
        }
    }

    Ok(())
}

/// Add the crate-level `info` directives on top of whatever `RUST_LOG` says
fn with_default_directives(filter: EnvFilter) -> EnvFilter {
    DEFAULT_LOG_DIRECTIVES
        .iter()
        .filter_map(|directive| directive.parse().ok())
        .fold(filter, EnvFilter::add_directive)
}
