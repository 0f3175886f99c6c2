//! Command execution context
//!
//! Loads configuration once and wires the form bridge every command submits
//! through.

use crate::bridge::FormBridge;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::navigator::TerminalNavigator;
use crate::client::NatterClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::FileSessionStore;

/// Bridge as wired for the terminal
pub type CliBridge = FormBridge<NatterClient, FileSessionStore, TerminalNavigator>;

/// Context for command execution containing the bridge and output format.
pub struct CommandContext {
    /// Bridge bound to the configured API, session file and navigator
    pub bridge: CliBridge,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Applying CLI/env overrides
    /// - Creating the API client for the configured base URL and policy
    /// - Opening the session file
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;

        let client = NatterClient::from_config(&config)?;
        let store = FileSessionStore::new(config.session_file()?);
        log::debug!(
            "Using {} with {} auth, session at {}",
            config.api_url,
            config.auth_mode,
            store.path().display()
        );

        Ok(Self {
            bridge: FormBridge::new(client, store, TerminalNavigator::new()),
            format: opts.format,
        })
    }

    /// Username of the stored session, if any
    pub fn session_user(&self) -> Result<Option<String>> {
        Ok(self.bridge.current_session()?.map(|s| s.username))
    }
}

/// Load the config file and apply CLI/env overrides
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    Config::load_at(opts.config_ref())?.with_overrides(&opts.overrides())
}
