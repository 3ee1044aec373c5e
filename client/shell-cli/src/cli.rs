use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shell")]
#[command(about = "Sign in, inspect the session, and manage your profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
