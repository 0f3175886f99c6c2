//! Configuration management for Natter

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::AuthPolicy;
use crate::error::{ConfigError, Result};

/// Local development host the Natter API listens on
pub const DEFAULT_API_URL: &str = "https://localhost:4567";

/// Directory under the home directory holding config and session files
const CONFIG_DIR: &str = ".natter";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL every request is built from
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// How the session artifact is attached to requests
    #[serde(default)]
    pub auth_mode: AuthPolicy,

    /// Accept self-signed certificates (local development hosts)
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Override for the session file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_path: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_mode: AuthPolicy::default(),
            accept_invalid_certs: false,
            session_path: None,
        }
    }
}

/// Runtime overrides coming from CLI flags or environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub auth_mode: Option<AuthPolicy>,
    pub session_path: Option<String>,
    pub insecure: bool,
}

impl Config {
    /// Directory holding the default config and session files
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(CONFIG_DIR))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if !resolved.exists() {
            return match path {
                Some(p) => Err(ConfigError::NotFound(p.to_string()).into()),
                None => Ok(Self::default()),
            };
        }
        Self::load_from(&resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(path, &contents)
    }

    /// Apply CLI/env overrides on top of the file configuration
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(url) = &overrides.api_url {
            self.api_url = url.clone();
        }
        if let Some(mode) = overrides.auth_mode {
            self.auth_mode = mode;
        }
        if let Some(path) = &overrides.session_path {
            self.session_path = Some(PathBuf::from(path));
        }
        if overrides.insecure {
            self.accept_invalid_certs = true;
        }
        self.validate()?;
        Ok(self)
    }

    /// Location of the session file
    pub fn session_file(&self) -> Result<PathBuf> {
        match &self.session_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("session.yaml")),
        }
    }

    fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::Invalid(format!("api_url '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_url must use http or https, got '{}'",
                url.scheme()
            ))
            .into());
        }
        Ok(())
    }
}

/// Write a file readable only by the current user, creating parent directories.
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}
