//! Reporting a bridge submission
//!
//! Every command follows the same flow:
//! 1. Submit through the bridge (with a spinner while the request is pending)
//! 2. Print the result, or the page the client was sent to

use std::future::Future;

use colored::Colorize;
use serde::Serialize;

use crate::bridge::{Page, Submission};
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{json, progress};

/// JSON shape of a finished submission
#[derive(Serialize)]
struct SubmissionView<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'static str>,
}

/// Await a submission with a spinner in pretty mode
pub async fn submit<T, Fut>(ctx: &CommandContext, message: &str, fut: Fut) -> Result<Submission<T>>
where
    Fut: Future<Output = Result<Submission<T>>>,
{
    let spinner = progress::spinner(ctx.format, message);
    let outcome = fut.await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    outcome
}

/// Print a submission outcome.
///
/// `pretty` renders a completed result; navigation is reported after it.
pub fn report<T, F>(ctx: &CommandContext, outcome: &Submission<T>, pretty: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    let location = ctx.bridge.navigator().location().map(Page::path);

    match ctx.format {
        OutputFormat::Json => {
            let view = SubmissionView {
                result: match outcome {
                    Submission::Completed(value) => Some(value),
                    Submission::RedirectedToLogin => None,
                },
                location,
            };
            println!("{}", json::format_json(&view)?);
        }
        OutputFormat::Pretty => {
            if let Submission::Completed(value) = outcome {
                pretty(value);
            }
            if let Some(location) = location {
                println!("{} {}", "→".dimmed(), location.cyan());
            }
        }
    }

    Ok(())
}
