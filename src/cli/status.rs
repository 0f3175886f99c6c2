//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::client::AuthPolicy;
use crate::config::Config;
use crate::error::Result;
use crate::output::json;
use crate::session::{FileSessionStore, SessionStore, StoredSession};

#[derive(Serialize)]
struct StatusView {
    config_file: String,
    api_url: String,
    auth_mode: AuthPolicy,
    session_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logged_in_at: Option<String>,
    /// Whether the stored artifact is the one the active policy presents
    session_usable: bool,
}

fn build_view(
    config: &Config,
    config_file: String,
    session_file: String,
    session: Option<StoredSession>,
) -> StatusView {
    let session_usable = session
        .as_ref()
        .is_some_and(|s| config.auth_mode.accepts(&s.artifact));

    StatusView {
        config_file,
        api_url: config.api_url.clone(),
        auth_mode: config.auth_mode,
        session_file,
        username: session.as_ref().map(|s| s.username.clone()),
        session: session.as_ref().map(|s| s.artifact.kind()),
        logged_in_at: session.as_ref().map(|s| s.created_at.to_rfc3339()),
        session_usable,
    }
}

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config = load_config(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    let store = FileSessionStore::new(config.session_file()?);
    let session = store.load()?;

    let view = build_view(
        &config,
        config_path.display().to_string(),
        store.path().display().to_string(),
        session,
    );

    if opts.format == OutputFormat::Json {
        println!("{}", json::format_json(&view)?);
        return Ok(());
    }

    println!("{}\n", "Natter Status".bold());

    if config_path.exists() {
        println!("Config file: {}", view.config_file.cyan());
    } else {
        println!("Config file: {} {}", view.config_file.cyan(), "(defaults)".dimmed());
    }
    println!("API URL: {}", view.api_url.cyan());
    println!("Auth mode: {}", view.auth_mode.to_string().bold());
    println!("Session file: {}", view.session_file.dimmed());
    println!();

    match (&view.username, view.session) {
        (Some(username), Some(kind)) => {
            if view.session_usable {
                println!("{} Logged in as {} ({})", "✓".green(), username.bold(), kind);
            } else {
                println!(
                    "{} Stored {} does not match auth mode '{}'",
                    "⚠".yellow(),
                    kind,
                    view.auth_mode
                );
                println!("  → Run 'natter login {}' again", username);
            }
            if let Some(at) = &view.logged_in_at {
                println!("  Logged in at: {}", at.dimmed());
            }
        }
        _ => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'natter login <username>' to start a session");
        }
    }

    println!();
    Ok(())
}
