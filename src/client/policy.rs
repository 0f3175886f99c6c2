//! Credential-attachment policy
//!
//! A deployment relies on exactly one session artifact representation. The
//! policy decides which one is created at login and how it is attached to
//! every later request.

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, COOKIE, HeaderMap, SET_COOKIE};
use serde::{Deserialize, Serialize};

use crate::client::models::LoginGrant;
use crate::session::SessionArtifact;

/// Header echoing the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// How the session artifact is stored and presented
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthPolicy {
    /// Opaque token sent as `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// Server session cookie plus a `csrfToken` echoed in `X-CSRF-Token`
    #[serde(rename = "cookie")]
    #[value(name = "cookie")]
    CsrfCookie,
}

impl AuthPolicy {
    /// Turn a login grant into the artifact this policy persists
    pub fn artifact_from(self, grant: LoginGrant) -> SessionArtifact {
        match self {
            AuthPolicy::Bearer => SessionArtifact::Bearer { token: grant.token },
            AuthPolicy::CsrfCookie => SessionArtifact::Cookie {
                session_cookie: grant.session_cookie,
                csrf_token: grant.token,
            },
        }
    }

    /// Whether `artifact` is the representation this policy presents
    pub fn accepts(self, artifact: &SessionArtifact) -> bool {
        matches!(
            (self, artifact),
            (AuthPolicy::Bearer, SessionArtifact::Bearer { .. })
                | (AuthPolicy::CsrfCookie, SessionArtifact::Cookie { .. })
        )
    }

    /// Attach the stored artifact to an outgoing request.
    ///
    /// An artifact of the other representation is ignored, so the request
    /// goes out unauthenticated and the server answers 401.
    pub fn apply(self, builder: RequestBuilder, artifact: Option<&SessionArtifact>) -> RequestBuilder {
        match (self, artifact) {
            (AuthPolicy::Bearer, Some(SessionArtifact::Bearer { token })) => {
                builder.header(AUTHORIZATION, format!("Bearer {}", token))
            }
            (
                AuthPolicy::CsrfCookie,
                Some(artifact @ SessionArtifact::Cookie { csrf_token, .. }),
            ) => {
                let builder = builder.header(CSRF_HEADER, csrf_token);
                match artifact.cookie_header() {
                    Some(cookie) => builder.header(COOKIE, cookie),
                    None => builder,
                }
            }
            _ => builder,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthPolicy::Bearer => "bearer",
            AuthPolicy::CsrfCookie => "cookie",
        }
    }
}

impl std::fmt::Display for AuthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the first `name=value` pair set by the server, dropping attributes.
pub fn session_cookie_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .find(|pair| pair.contains('=') && !pair.starts_with('='))
        .map(str::to_string)
}
