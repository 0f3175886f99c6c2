//! Page navigation

/// Pages the client can be sent to after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Main UI, reached after a successful login
    Main,
    /// Login form, reached on any 401
    Login,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Main => "/natter.html",
            Page::Login => "/login.html",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Replaces the current location, like `window.location.replace`
pub trait Navigator: Send + Sync {
    fn replace(&self, page: Page);
}

/// Navigator that records every location it was sent to.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: std::sync::Mutex<Vec<Page>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn history(&self) -> Vec<Page> {
        self.history.lock().unwrap().clone()
    }

    /// Current location, if any navigation happened
    pub fn location(&self) -> Option<&'static str> {
        self.history.lock().unwrap().last().map(|p| p.path())
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn replace(&self, page: Page) {
        self.history.lock().unwrap().push(page);
    }
}
