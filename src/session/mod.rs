//! Client-side session storage
//!
//! Holds the one storage slot the login flow writes and every later request
//! builder reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

mod file;
#[cfg(test)]
mod memory;

pub use file::FileSessionStore;
#[cfg(test)]
pub use memory::MemorySessionStore;

/// Name of the anti-forgery cookie in the cookie representation
pub const CSRF_COOKIE_NAME: &str = "csrfToken";

/// Whatever represents an authenticated session for the active policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionArtifact {
    /// Opaque bearer token
    Bearer { token: String },

    /// Server session cookie plus the anti-forgery token cookie
    Cookie {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_cookie: Option<String>,
        csrf_token: String,
    },
}

impl SessionArtifact {
    /// `Cookie` header value a browser would send: the server session
    /// cookie followed by `csrfToken`
    pub fn cookie_header(&self) -> Option<String> {
        match self {
            SessionArtifact::Cookie {
                session_cookie,
                csrf_token,
            } => {
                let csrf = format!("{}={}", CSRF_COOKIE_NAME, csrf_token);
                Some(match session_cookie {
                    Some(cookie) => format!("{}; {}", cookie, csrf),
                    None => csrf,
                })
            }
            SessionArtifact::Bearer { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SessionArtifact::Bearer { .. } => "bearer token",
            SessionArtifact::Cookie { .. } => "session cookie + csrfToken",
        }
    }
}

/// Persisted session slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// User that logged in; default owner/author for later submissions
    pub username: String,

    pub artifact: SessionArtifact,

    pub created_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(username: impl Into<String>, artifact: SessionArtifact) -> Self {
        Self {
            username: username.into(),
            artifact,
            created_at: Utc::now(),
        }
    }
}

/// Storage for the session slot that survives restarts
pub trait SessionStore: Send + Sync {
    /// Read the stored session, if any
    fn load(&self) -> Result<Option<StoredSession>>;

    /// Replace the stored session
    fn save(&self, session: &StoredSession) -> Result<()>;
}
