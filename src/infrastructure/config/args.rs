//! Command-line arguments.

use super::app_config::{LogLevel, StoreBackend};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "session-manager",
    version,
    about = "Log in or register against an auth server and keep the session token",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Authentication server base URL.
    #[arg(long, env = "SESSION_MANAGER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Token store backend.
    #[arg(long, value_enum, global = true)]
    pub store: Option<StoreBackend>,

    /// Token store file (file backend only).
    #[arg(long, value_name = "PATH", global = true)]
    pub store_path: Option<PathBuf>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the issued token.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,

        /// Account password.
        #[arg(long, env = "SESSION_MANAGER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a new account.
    Register {
        /// Account email.
        #[arg(long)]
        email: String,

        /// Display name for the new account.
        #[arg(long)]
        username: String,

        /// Account password.
        #[arg(long, env = "SESSION_MANAGER_PASSWORD", hide_env_values = true)]
        password: String,

        /// Password confirmation; defaults to `--password`.
        #[arg(long)]
        password2: Option<String>,
    },

    /// Show the token stored for an email.
    Session {
        /// Email the login was performed with.
        #[arg(long)]
        email: String,
    },
}
