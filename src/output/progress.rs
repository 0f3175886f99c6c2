//! Spinner shown while a request is pending

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;

/// Start a stderr spinner in pretty mode; JSON output stays clean.
pub fn spinner(format: OutputFormat, message: &str) -> Option<ProgressBar> {
    if format != OutputFormat::Pretty {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}
