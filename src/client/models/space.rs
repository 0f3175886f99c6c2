//! Space and message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Body of `POST /spaces`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceCreationRequest {
    pub name: String,
    pub owner: String,
}

/// Space returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSpace {
    pub name: String,

    /// Capability URI granting access to the space
    pub uri: String,
}

/// Body of `POST /spaces/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub author: String,
    pub message: String,
}

/// Location of a freshly posted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedMessage {
    pub uri: String,
}

/// A single message as stored on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub uri: String,
    pub author: String,
    pub time: DateTime<Utc>,
    pub message: String,
}

/// Role granted to a space member
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SpaceRole {
    Owner,
    Moderator,
    #[default]
    Member,
    Observer,
}

impl std::fmt::Display for SpaceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SpaceRole::Owner => "owner",
            SpaceRole::Moderator => "moderator",
            SpaceRole::Member => "member",
            SpaceRole::Observer => "observer",
        })
    }
}

/// Body of `POST /spaces/{id}/members`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRequest {
    pub username: String,
    pub role: SpaceRole,
}

/// Membership confirmed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub username: String,
    pub role: SpaceRole,
}

/// Reference to a space: a numeric id, a `/spaces/{id}` path, or a full
/// capability URI.
///
/// A capability URI's `access_token` travels along on every derived request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceRef {
    pub id: u64,
    pub access_token: Option<String>,
}

impl SpaceRef {
    /// Path of the space's message collection
    pub fn messages_path(&self) -> String {
        format!("/spaces/{}/messages", self.id)
    }

    /// Path of the space's member collection
    pub fn members_path(&self) -> String {
        format!("/spaces/{}/members", self.id)
    }
}

impl std::str::FromStr for SpaceRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u64>() {
            return Ok(Self {
                id,
                access_token: None,
            });
        }

        let invalid = || Error::InvalidInput(format!("not a space id or URI: '{}'", s));

        // Relative paths are resolved against a placeholder origin
        let url = reqwest::Url::parse(s)
            .or_else(|_| reqwest::Url::parse("http://localhost/").and_then(|base| base.join(s)))
            .map_err(|_| invalid())?;

        let mut segments = url.path_segments().ok_or_else(invalid)?;
        if segments.next() != Some("spaces") {
            return Err(invalid());
        }
        let id = segments
            .next()
            .and_then(|seg| seg.parse::<u64>().ok())
            .ok_or_else(invalid)?;

        let access_token = url
            .query_pairs()
            .find(|(k, _)| k == "access_token")
            .map(|(_, v)| v.into_owned());

        Ok(Self { id, access_token })
    }
}
