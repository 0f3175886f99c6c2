//! Login, logout and registration commands

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};
use serde::Serialize;

use crate::bridge::LoginForm;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{report, submit};
use crate::cli::CommandContext;
use crate::error::Result;

/// What a login reports; the artifact itself stays in the session file
#[derive(Serialize)]
struct LoginView {
    username: String,
    session: &'static str,
}

/// Use the given password or prompt for one
fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme);
    prompt = prompt.with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, username: String, password: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let form = LoginForm::new(username, password_or_prompt(password, false)?)?;

    let outcome = submit(&ctx, "Logging in...", ctx.bridge.login(form)).await?;

    let outcome = outcome.map(|session| LoginView {
        username: session.username,
        session: session.artifact.kind(),
    });

    report(&ctx, &outcome, |view| {
        println!(
            "{} Logged in as {} ({})",
            "✓".green(),
            view.username.bold(),
            view.session.dimmed()
        );
    })
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = submit(&ctx, "Logging out...", ctx.bridge.logout()).await?;

    report(&ctx, &outcome, |_| {
        println!("{} Logged out.", "✓".green());
    })
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    username: String,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let form = LoginForm::new(username, password_or_prompt(password, true)?)?;

    let outcome = submit(&ctx, "Registering...", ctx.bridge.register(form)).await?;

    report(&ctx, &outcome, |user| {
        println!("{} Registered {}", "✓".green(), user.username.bold());
        println!(
            "  Log in with: {}",
            format!("natter login {}", user.username).cyan()
        );
    })
}
