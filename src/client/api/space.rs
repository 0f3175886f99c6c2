//! Space API trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::client::models::{
    CreatedSpace, Member, MemberRequest, Message, NewMessage, PostedMessage, SpaceCreationRequest,
    SpaceRef,
};
use crate::error::Result;
use crate::session::SessionArtifact;

/// Space and message operations. Every call presents the stored artifact.
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// `POST /spaces`
    async fn create_space(
        &self,
        artifact: Option<&SessionArtifact>,
        request: &SpaceCreationRequest,
    ) -> Result<CreatedSpace>;

    /// `POST /spaces/{id}/messages`
    async fn post_message(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        message: &NewMessage,
    ) -> Result<PostedMessage>;

    /// `GET /spaces/{id}/messages`, returning message URIs
    async fn list_messages(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<String>>;

    /// `GET` a single message by URI (absolute or relative to the base URL)
    async fn read_message(&self, artifact: Option<&SessionArtifact>, uri: &str)
    -> Result<Message>;

    /// `DELETE` a single message by URI (moderators only)
    async fn delete_message(&self, artifact: Option<&SessionArtifact>, uri: &str) -> Result<()>;

    /// `POST /spaces/{id}/members`
    async fn add_member(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        request: &MemberRequest,
    ) -> Result<Member>;
}
