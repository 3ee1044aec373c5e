use crate::{preferences_commands::PreferencesCommands, profile_commands::ProfileCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out locally and tell the backend
    Logout,

    /// Show the current session
    Status,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Preferences operations
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommands,
    },
}
