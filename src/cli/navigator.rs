//! Navigation for a terminal session
//!
//! There is no browser to redirect, so the navigator remembers where the
//! client was sent and the command reports it.

use std::sync::Mutex;

use crate::bridge::{Navigator, Page};

/// Remembers the last page the bridge navigated to
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    location: Mutex<Option<Page>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last location, if the submission navigated
    pub fn location(&self) -> Option<Page> {
        self.location.lock().ok().and_then(|loc| *loc)
    }
}

impl Navigator for TerminalNavigator {
    fn replace(&self, page: Page) {
        log::debug!("Navigating to {}", page);
        if let Ok(mut location) = self.location.lock() {
            *location = Some(page);
        }
    }
}
