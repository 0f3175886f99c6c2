//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single argument.

use crate::cli::{Cli, OutputFormat};
use crate::client::AuthPolicy;
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is merged in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.natter/config.yaml)
    pub config: Option<String>,

    /// Base URL override
    pub api_url: Option<String>,

    /// Credential-attachment policy override
    pub auth_mode: Option<AuthPolicy>,

    /// Session file override
    pub session: Option<String>,

    /// Accept self-signed certificates
    pub insecure: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            auth_mode: cli.auth_mode,
            session: cli.session.clone(),
            insecure: cli.insecure,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Overrides to merge on top of the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            auth_mode: self.auth_mode,
            session_path: self.session.clone(),
            insecure: self.insecure,
        }
    }
}
