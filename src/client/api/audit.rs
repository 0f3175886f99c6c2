//! Audit API trait

use async_trait::async_trait;

use crate::client::models::AuditEntry;
use crate::error::Result;
use crate::session::SessionArtifact;

/// Server-side request audit trail
#[async_trait]
pub trait AuditApi: Send + Sync {
    /// `GET /logs`: the most recent entries of the last hour
    async fn read_audit_log(&self, artifact: Option<&SessionArtifact>) -> Result<Vec<AuditEntry>>;
}
