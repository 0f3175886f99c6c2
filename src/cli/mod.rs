//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod audit;
pub mod config;
pub mod context;
pub mod handlers;
pub mod message;
pub mod navigator;
pub mod session;
pub mod space;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

use crate::client::AuthPolicy;
use crate::client::models::SpaceRole;

/// Natter CLI - log in, create spaces and post messages on a Natter API
#[derive(Parser, Debug)]
#[command(name = "natter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "NATTER_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "NATTER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "NATTER_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// How the session is presented to the API (bearer, cookie)
    #[arg(long, global = true, env = "NATTER_AUTH_MODE", hide_env = true)]
    pub auth_mode: Option<AuthPolicy>,

    /// Override session file location
    #[arg(long, global = true, env = "NATTER_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "NATTER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Username to log in as
        username: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "NATTER_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// End the current session on the server
    Logout,

    /// Register a new user account
    Register {
        /// Username to register
        username: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "NATTER_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Manage spaces
    #[command(subcommand)]
    Space(SpaceCommands),

    /// Post and read messages in a space
    #[command(subcommand)]
    Message(MessageCommands),

    /// Inspect the server's request audit trail
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Show configuration and session status
    Status,

    /// Inspect or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   natter completion bash > /etc/bash_completion.d/natter
  zsh:    natter completion zsh > \"${fpath[1]}/_natter\"
  fish:   natter completion fish > ~/.config/fish/completions/natter.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Space subcommands
#[derive(Subcommand, Debug)]
pub enum SpaceCommands {
    /// Create a new space
    Create {
        /// Space name
        name: String,

        /// Owner of the space (defaults to the logged-in user)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Grant a user a role in a space
    AddMember {
        /// Space id, /spaces/{id} path, or capability URI
        space: String,

        /// User to add
        username: String,

        /// Role to grant
        #[arg(long, value_enum, default_value_t = SpaceRole::Member)]
        role: SpaceRole,
    },
}

/// Message subcommands
#[derive(Subcommand, Debug)]
pub enum MessageCommands {
    /// Post a message to a space
    Post {
        /// Space id, /spaces/{id} path, or capability URI
        space: String,

        /// Message text
        message: String,

        /// Author (defaults to the logged-in user)
        #[arg(long)]
        author: Option<String>,
    },

    /// List message URIs in a space
    List {
        /// Space id, /spaces/{id} path, or capability URI
        space: String,

        /// Only messages posted at or after this time (RFC 3339)
        #[arg(long)]
        since: Option<String>,
    },

    /// Read a single message
    Read {
        /// Message URI as returned by `message list` or `message post`
        uri: String,
    },

    /// Delete a message (moderators only)
    Delete {
        /// Message URI as returned by `message list` or `message post`
        uri: String,
    },
}

/// Audit log subcommands
#[derive(Subcommand, Debug)]
pub enum AuditCommands {
    /// List recent audit entries (last hour, at most 20)
    List,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Persist the credential-attachment policy
    SetMode {
        /// bearer or cookie
        #[arg(value_enum)]
        mode: AuthPolicy,
    },

    /// Persist the API base URL
    SetUrl {
        /// Base URL, e.g. https://localhost:4567
        url: String,
    },
}
