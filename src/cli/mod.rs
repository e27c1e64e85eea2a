use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::*;
use crate::registry::default_registry_path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to registry file with stored accounts (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    registry: Option<PathBuf>,
    /// Command
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an account (prompts for the base32 secret on stdin)
    Add {
        /// Account name (must not contain whitespace)
        account: String,
        /// Issuer label stored with the account
        #[arg(short, long, value_name = "ISSUER")]
        issuer: Option<String>,
        /// Code length
        #[arg(short, long, value_name = "DIGITS", default_value_t = 6,
              value_parser = clap::value_parser!(u32).range(6..=8))]
        digits: u32,
    },
    /// List stored account names
    List,
    /// Show the rotating code for an account until a key is pressed
    Show {
        /// Account name
        account: String,
        /// Exit after this many seconds instead of waiting for a key
        #[arg(long = "for", value_name = "SECONDS")]
        duration: Option<u64>,
    },
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        let registry_path = match &cli.registry {
            Some(path) => path.clone(),
            None => default_registry_path()?,
        };

        match &cli.command {
            Some(Commands::Add {
                account,
                issuer,
                digits,
            }) => add_account(&registry_path, account, issuer.clone(), *digits),
            Some(Commands::List) => list_accounts(&registry_path),
            Some(Commands::Show { account, duration }) => {
                show_account(&registry_path, account, *duration)
            }
            None => {
                Cli::command().print_help().ok();
                Ok(())
            }
        }
    }
}
