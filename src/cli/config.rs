//! Configuration commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::client::AuthPolicy;
use crate::config::{Config, Overrides};
use crate::error::Result;
use crate::output::json;

/// Run the config show command
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = load_config(opts)?;

    match opts.format {
        OutputFormat::Json => println!("{}", json::format_json(&config)?),
        OutputFormat::Pretty => {
            let session_file = config.session_file()?;
            println!("api_url: {}", config.api_url.cyan());
            println!("auth_mode: {}", config.auth_mode.to_string().bold());
            println!("accept_invalid_certs: {}", config.accept_invalid_certs);
            println!("session_file: {}", session_file.display());
        }
    }

    Ok(())
}

/// Load the file config alone, so CLI overrides are not persisted
fn load_file_config(opts: &GlobalOptions) -> Result<Config> {
    match Config::load_at(opts.config_ref()) {
        Ok(config) => Ok(config),
        Err(crate::error::Error::Config(crate::error::ConfigError::NotFound(_))) => {
            Ok(Config::default())
        }
        Err(err) => Err(err),
    }
}

/// Run the config set-mode command
pub fn set_mode(opts: &GlobalOptions, mode: AuthPolicy) -> Result<()> {
    let mut config = load_file_config(opts)?;
    config.auth_mode = mode;
    config.save_at(opts.config_ref())?;

    println!("{} Auth mode set to: {}", "✓".green(), mode.to_string().bold());
    println!("  Existing sessions of the other kind are ignored; log in again.");
    Ok(())
}

/// Run the config set-url command
pub fn set_url(opts: &GlobalOptions, url: String) -> Result<()> {
    let config = load_file_config(opts)?.with_overrides(&Overrides {
        api_url: Some(url),
        ..Default::default()
    })?;
    config.save_at(opts.config_ref())?;

    println!("{} API URL set to: {}", "✓".green(), config.api_url.cyan());
    Ok(())
}
