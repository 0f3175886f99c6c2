//! Message commands

use chrono::{DateTime, Utc};
use colored::Colorize;
use tabled::Tabled;

use crate::bridge::MessageForm;
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{report, submit};
use crate::client::models::SpaceRef;
use crate::error::{Error, Result};
use crate::output::table;

/// Message URI for table display
#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "URI")]
    uri: String,
}

fn parse_since(since: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    since
        .map(|s| {
            DateTime::parse_from_rfc3339(s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| Error::InvalidInput(format!("--since '{}': {}", s, e)))
        })
        .transpose()
}

/// Run the message post command
pub async fn post(
    opts: &GlobalOptions,
    space: &str,
    message: String,
    author: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let space: SpaceRef = space.parse()?;

    let author = match author {
        Some(author) => author,
        None => ctx.session_user()?.ok_or_else(|| {
            Error::InvalidInput("no author given and nobody is logged in; pass --author".to_string())
        })?,
    };
    let form = MessageForm::new(author, message)?;

    let outcome = submit(&ctx, "Posting message...", ctx.bridge.post_message(&space, form)).await?;

    report(&ctx, &outcome, |posted| {
        println!("{} Posted message: {}", "✓".green(), posted.uri.cyan());
    })
}

/// Run the message list command
pub async fn list(opts: &GlobalOptions, space: &str, since: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let space: SpaceRef = space.parse()?;
    let since = parse_since(since)?;

    let outcome = submit(
        &ctx,
        "Fetching messages...",
        ctx.bridge.list_messages(&space, since),
    )
    .await?;

    report(&ctx, &outcome, |uris| {
        let rows: Vec<MessageRow> = uris
            .iter()
            .enumerate()
            .map(|(i, uri)| MessageRow {
                index: i + 1,
                uri: uri.clone(),
            })
            .collect();
        println!("{}", table::format_table(&rows, "No messages."));
    })
}

/// Run the message read command
pub async fn read(opts: &GlobalOptions, uri: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = submit(&ctx, "Fetching message...", ctx.bridge.read_message(uri)).await?;

    report(&ctx, &outcome, |message| {
        println!(
            "{} {}",
            message.author.bold(),
            message.time.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
        );
        println!("{}", message.message);
    })
}

/// Run the message delete command
pub async fn delete(opts: &GlobalOptions, uri: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = submit(&ctx, "Deleting message...", ctx.bridge.delete_message(uri)).await?;

    report(&ctx, &outcome, |_| {
        println!("{} Deleted message: {}", "✓".green(), uri.cyan());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_since() {
        assert_eq!(parse_since(None).unwrap(), None);

        let since = parse_since(Some("2024-03-01T12:00:00+01:00")).unwrap().unwrap();
        assert_eq!(since.to_rfc3339(), "2024-03-01T11:00:00+00:00");

        assert!(parse_since(Some("yesterday")).is_err());
    }
}
