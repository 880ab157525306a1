//! Command-line interface.

pub mod auth;
pub mod completions;
pub mod decode;
pub mod encode;
pub mod output;
pub mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants::{CLOUD_AUTH_ENV, CLOUD_ID_ENV};
use crate::error::Result;

/// elasticloud - Decode hosted search deployment cloud ids.
#[derive(Parser)]
#[command(
    name = "elasticloud",
    about = "Decode hosted search deployment cloud ids and cloud auth strings",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .elasticloud.toml in the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decode a cloud id into its endpoints
    Decode {
        /// Cloud id (label:base64payload)
        #[arg(env = CLOUD_ID_ENV)]
        cloud_id: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split a cloud auth string into username and password
    Auth {
        /// Cloud auth (username:password)
        #[arg(env = CLOUD_AUTH_ENV, hide_env_values = true)]
        cloud_auth: Option<String>,
        /// Print the password instead of masking it
        #[arg(long)]
        show_password: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a cloud id from a domain and two service ids
    Encode {
        /// Domain shared by both services
        #[arg(long)]
        domain: String,
        /// Domain port, inherited by services without their own
        #[arg(long)]
        port: Option<String>,
        /// Primary (data) service id
        #[arg(long)]
        primary: String,
        /// Primary service port
        #[arg(long)]
        primary_port: Option<String>,
        /// Secondary (management) service id
        #[arg(long)]
        secondary: String,
        /// Secondary service port
        #[arg(long)]
        secondary_port: Option<String>,
        /// Human-readable label prefix
        #[arg(long)]
        label: Option<String>,
    },

    /// Show the client settings resolved from config, environment and arguments
    Settings {
        /// Cloud id (label:base64payload)
        #[arg(long, env = CLOUD_ID_ENV)]
        cloud_id: Option<String>,
        /// Cloud auth (username:password)
        #[arg(long, env = CLOUD_AUTH_ENV, hide_env_values = true)]
        cloud_auth: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Run a parsed command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Command::Decode { cloud_id, json } => {
            let config = Config::discover(config_path.as_deref())?;
            decode::execute(&config.cloud_id(cloud_id)?, json)
        }
        Command::Auth {
            cloud_auth,
            show_password,
            json,
        } => {
            let config = Config::discover(config_path.as_deref())?;
            auth::execute(&config.cloud_auth(cloud_auth)?, show_password, json)
        }
        Command::Encode {
            domain,
            port,
            primary,
            primary_port,
            secondary,
            secondary_port,
            label,
        } => encode::execute(encode::Parts {
            domain,
            port,
            primary,
            primary_port,
            secondary,
            secondary_port,
            label,
        }),
        Command::Settings {
            cloud_id,
            cloud_auth,
            json,
        } => {
            let config = Config::discover(config_path.as_deref())?;
            settings::execute(&config, cloud_id, cloud_auth, json)
        }
        Command::Completions { shell } => completions::execute(shell),
    }
}
