//! Mock Natter API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuditApi, SessionApi, SpaceApi, UserApi};
use super::models::{
    AuditEntry, CreatedSpace, Credential, LoginGrant, Member, MemberRequest, Message, NewMessage,
    PostedMessage, RegisteredUser, Registration, SpaceCreationRequest, SpaceRef,
};
use super::policy::AuthPolicy;
use crate::error::{ApiError, Result};
use crate::session::SessionArtifact;

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockNatterClient::new(AuthPolicy::Bearer)
///     .with_token("abc123")
///     .await;
///
/// let grant = mock.login(&Credential::new("alice", "secret")).await?;
/// assert_eq!(grant.token, "abc123");
/// ```
pub struct MockNatterClient {
    policy: AuthPolicy,
    /// Token to return from login
    token: Arc<Mutex<String>>,
    /// Session cookie to return from login
    session_cookie: Arc<Mutex<Option<String>>>,
    /// Messages to return from read_message/list_messages
    messages: Arc<Mutex<Vec<Message>>>,
    /// Entries to return from read_audit_log
    audit_log: Arc<Mutex<Vec<AuditEntry>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Reject calls whose artifact does not match the policy with 401
    require_session: Arc<Mutex<bool>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Artifacts presented on each authenticated call
    presented: Arc<Mutex<Vec<Option<SessionArtifact>>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub logout: usize,
    pub create_space: usize,
    pub post_message: usize,
    pub list_messages: usize,
    pub read_message: usize,
    pub delete_message: usize,
    pub add_member: usize,
    pub register: usize,
    pub read_audit_log: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.logout
            + self.create_space
            + self.post_message
            + self.list_messages
            + self.read_message
            + self.delete_message
            + self.add_member
            + self.register
            + self.read_audit_log
    }
}

impl MockNatterClient {
    /// Create a new mock client with default responses.
    pub fn new(policy: AuthPolicy) -> Self {
        Self {
            policy,
            token: Arc::new(Mutex::new("mock-token".to_string())),
            session_cookie: Arc::new(Mutex::new(None)),
            messages: Arc::new(Mutex::new(Vec::new())),
            audit_log: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            require_session: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the token returned from login.
    pub async fn with_token(self, token: &str) -> Self {
        *self.token.lock().await = token.to_string();
        self
    }

    /// Configure the session cookie returned from login.
    pub async fn with_session_cookie(self, cookie: &str) -> Self {
        *self.session_cookie.lock().await = Some(cookie.to_string());
        self
    }

    /// Configure messages the space endpoints serve.
    pub async fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().await = messages;
        self
    }

    /// Configure the audit log entries served.
    pub async fn with_audit_log(self, entries: Vec<AuditEntry>) -> Self {
        *self.audit_log.lock().await = entries;
        self
    }

    /// Messages still held after any deletions.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Answer 401 whenever the presented artifact does not fit the policy.
    pub async fn requiring_session(self) -> Self {
        *self.require_session.lock().await = true;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Artifacts presented on authenticated calls, in order.
    pub async fn presented(&self) -> Vec<Option<SessionArtifact>> {
        self.presented.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record the presented artifact and apply the session requirement.
    async fn authorize(&self, artifact: Option<&SessionArtifact>) -> Result<()> {
        self.presented.lock().await.push(artifact.cloned());

        if !*self.require_session.lock().await {
            return Ok(());
        }
        if artifact.is_some_and(|a| self.policy.accepts(a)) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized.into())
        }
    }
}

// ============================================================================
// SessionApi Implementation
// ============================================================================

#[async_trait]
impl SessionApi for MockNatterClient {
    fn policy(&self) -> AuthPolicy {
        self.policy
    }

    async fn login(&self, _credential: &Credential) -> Result<LoginGrant> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        Ok(LoginGrant {
            token: self.token.lock().await.clone(),
            session_cookie: self.session_cookie.lock().await.clone(),
        })
    }

    async fn logout(&self, artifact: Option<&SessionArtifact>) -> Result<()> {
        self.call_count.lock().await.logout += 1;
        self.check_error().await?;
        self.authorize(artifact).await
    }
}

// ============================================================================
// SpaceApi Implementation
// ============================================================================

#[async_trait]
impl SpaceApi for MockNatterClient {
    async fn create_space(
        &self,
        artifact: Option<&SessionArtifact>,
        request: &SpaceCreationRequest,
    ) -> Result<CreatedSpace> {
        self.call_count.lock().await.create_space += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        Ok(CreatedSpace {
            name: request.name.clone(),
            uri: "/spaces/1?access_token=mock-capability".to_string(),
        })
    }

    async fn post_message(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        _message: &NewMessage,
    ) -> Result<PostedMessage> {
        self.call_count.lock().await.post_message += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        let next = self.messages.lock().await.len() + 1;
        Ok(PostedMessage {
            uri: format!("{}/{}", space.messages_path(), next),
        })
    }

    async fn list_messages(
        &self,
        artifact: Option<&SessionArtifact>,
        _space: &SpaceRef,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<String>> {
        self.call_count.lock().await.list_messages += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        Ok(self
            .messages
            .lock()
            .await
            .iter()
            .filter(|m| since.is_none_or(|since| m.time >= since))
            .map(|m| m.uri.clone())
            .collect())
    }

    async fn read_message(
        &self,
        artifact: Option<&SessionArtifact>,
        uri: &str,
    ) -> Result<Message> {
        self.call_count.lock().await.read_message += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        self.messages
            .lock()
            .await
            .iter()
            .find(|m| m.uri == uri)
            .cloned()
            .ok_or_else(|| ApiError::status(reqwest::StatusCode::NOT_FOUND, String::new()).into())
    }

    async fn delete_message(&self, artifact: Option<&SessionArtifact>, uri: &str) -> Result<()> {
        self.call_count.lock().await.delete_message += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        self.messages.lock().await.retain(|m| m.uri != uri);
        Ok(())
    }

    async fn add_member(
        &self,
        artifact: Option<&SessionArtifact>,
        _space: &SpaceRef,
        request: &MemberRequest,
    ) -> Result<Member> {
        self.call_count.lock().await.add_member += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        Ok(Member {
            username: request.username.clone(),
            role: request.role,
        })
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockNatterClient {
    async fn register(&self, registration: &Registration) -> Result<RegisteredUser> {
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        Ok(RegisteredUser {
            username: registration.username.clone(),
        })
    }
}

// ============================================================================
// AuditApi Implementation
// ============================================================================

#[async_trait]
impl AuditApi for MockNatterClient {
    async fn read_audit_log(&self, artifact: Option<&SessionArtifact>) -> Result<Vec<AuditEntry>> {
        self.call_count.lock().await.read_audit_log += 1;
        self.check_error().await?;
        self.authorize(artifact).await?;

        Ok(self.audit_log.lock().await.clone())
    }
}
