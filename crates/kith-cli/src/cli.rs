use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use kith_core::actions::ContactAction;

#[derive(Parser)]
#[command(name = "kith")]
#[command(about = "One of your people, every day")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Optional path to the exported contacts JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Optional path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's contact (default)
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Never show the current contact again and pick someone else
    #[command(alias = "remove")]
    Exclude {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reach out to today's contact
    Reach {
        /// How to reach them
        #[arg(value_enum)]
        action: ReachAction,
        /// Print the URI instead of opening it
        #[arg(long)]
        dry_run: bool,
    },
    /// List excluded contact ids
    Excluded {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReachAction {
    Call,
    Sms,
    Email,
    Contact,
}

impl From<ReachAction> for ContactAction {
    fn from(action: ReachAction) -> Self {
        match action {
            ReachAction::Call => Self::Call,
            ReachAction::Sms => Self::Sms,
            ReachAction::Email => Self::Email,
            ReachAction::Contact => Self::ViewContact,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
