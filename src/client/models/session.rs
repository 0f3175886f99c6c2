//! Login/session models

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// Username/password pair entered at login.
///
/// Only ever used to build one `Basic` authorization header; never persisted.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic base64(username:password)`
    pub fn basic_auth_header(&self) -> String {
        let encoded = general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", encoded)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of a successful `POST /sessions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Everything a successful login hands back to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    /// Token from the response body
    pub token: String,

    /// Session cookie from `Set-Cookie`, when the server set one
    pub session_cookie: Option<String>,
}
