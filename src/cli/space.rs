//! Space commands

use colored::Colorize;

use crate::bridge::{MemberForm, SpaceForm};
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{report, submit};
use crate::client::models::{SpaceRef, SpaceRole};
use crate::error::{Error, Result};

/// Run the space create command
pub async fn create(opts: &GlobalOptions, name: String, owner: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let owner = match owner {
        Some(owner) => owner,
        None => ctx.session_user()?.ok_or_else(|| {
            Error::InvalidInput("no owner given and nobody is logged in; pass --owner".to_string())
        })?,
    };
    let form = SpaceForm::new(name, owner)?;

    let outcome = submit(&ctx, "Creating space...", ctx.bridge.create_space(form)).await?;

    report(&ctx, &outcome, |space| {
        println!("{} Created space: {}", "✓".green(), space.name.bold());
        println!("  URI: {}", space.uri.cyan());
    })
}

/// Run the space add-member command
pub async fn add_member(
    opts: &GlobalOptions,
    space: &str,
    username: String,
    role: SpaceRole,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let space: SpaceRef = space.parse()?;
    let form = MemberForm::new(username, role)?;

    let outcome = submit(&ctx, "Adding member...", ctx.bridge.add_member(&space, form)).await?;

    report(&ctx, &outcome, |member| {
        println!(
            "{} Added {} to space {} as {}",
            "✓".green(),
            member.username.bold(),
            space.id,
            member.role.to_string().cyan()
        );
    })
}
