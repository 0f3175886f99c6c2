//! Session API trait

use async_trait::async_trait;

use crate::client::AuthPolicy;
use crate::client::models::{Credential, LoginGrant};
use crate::error::Result;
use crate::session::SessionArtifact;

/// Login and logout against `/sessions`
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Policy used to attach session artifacts to requests
    fn policy(&self) -> AuthPolicy;

    /// `POST /sessions` with HTTP Basic credentials
    async fn login(&self, credential: &Credential) -> Result<LoginGrant>;

    /// `DELETE /sessions` presenting the stored artifact
    async fn logout(&self, artifact: Option<&SessionArtifact>) -> Result<()>;
}
