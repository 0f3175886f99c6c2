//! Form bridge
//!
//! Turns one form submission into exactly one API call and the response into
//! one observable effect: a stored session, a navigation, or a log line.
//!
//! Response handling is shared by every action:
//! - success: the action's effect is applied
//! - 401: the navigator is sent to the login page, nothing else happens
//! - any other failure: the error is returned as the diagnostic; storage
//!   and location are left untouched
//!
//! Nothing is retried.

use chrono::{DateTime, Utc};

mod forms;
mod navigator;

pub use forms::{LoginForm, MemberForm, MessageForm, SpaceForm};
#[cfg(test)]
pub use navigator::RecordingNavigator;
pub use navigator::{Navigator, Page};

use crate::client::NatterApi;
use crate::client::models::{
    AuditEntry, CreatedSpace, Credential, Member, MemberRequest, Message, NewMessage,
    PostedMessage, RegisteredUser, Registration, SpaceCreationRequest, SpaceRef,
};
use crate::error::{ApiError, Error, Result};
use crate::session::{SessionArtifact, SessionStore, StoredSession};

/// How a submission ended when it did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// The server accepted the request
    Completed(T),
    /// The server answered 401 and the client was sent to the login page
    RedirectedToLogin,
}

impl<T> Submission<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Submission<U> {
        match self {
            Submission::Completed(value) => Submission::Completed(f(value)),
            Submission::RedirectedToLogin => Submission::RedirectedToLogin,
        }
    }

    #[cfg(test)]
    pub fn completed(self) -> Option<T> {
        match self {
            Submission::Completed(value) => Some(value),
            Submission::RedirectedToLogin => None,
        }
    }
}

/// Binds form submissions to the Natter API.
///
/// The API client (which carries base URL and attachment policy), session
/// store and navigator are injected.
pub struct FormBridge<A, S, N> {
    api: A,
    store: S,
    navigator: N,
}

impl<A, S, N> FormBridge<A, S, N>
where
    A: NatterApi,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(api: A, store: S, navigator: N) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Session currently held in storage
    pub fn current_session(&self) -> Result<Option<StoredSession>> {
        self.store.load()
    }

    fn artifact(&self) -> Result<Option<SessionArtifact>> {
        Ok(self.store.load()?.map(|s| s.artifact))
    }

    /// Map an API result onto the shared response handling
    fn settle<T>(&self, action: &str, result: Result<T>) -> Result<Submission<T>> {
        match result {
            Ok(value) => Ok(Submission::Completed(value)),
            Err(Error::Api(ApiError::Unauthorized)) => {
                log::debug!("{} was unauthorized, redirecting to {}", action, Page::Login);
                self.navigator.replace(Page::Login);
                Ok(Submission::RedirectedToLogin)
            }
            Err(err) => {
                log::debug!("Error {}: {}", action, err);
                Err(err)
            }
        }
    }

    /// Log in with Basic credentials, persist the session and go to the main page
    pub async fn login(&self, form: LoginForm) -> Result<Submission<StoredSession>> {
        let credential = Credential::new(form.username, form.password);
        let result = self.api.login(&credential).await;

        let grant = match self.settle("logging in", result)? {
            Submission::Completed(grant) => grant,
            Submission::RedirectedToLogin => return Ok(Submission::RedirectedToLogin),
        };

        let session = StoredSession::new(
            credential.username,
            self.api.policy().artifact_from(grant),
        );
        if let Err(err) = self.store.save(&session) {
            log::debug!("Error storing session: {}", err);
            return Err(err);
        }

        self.navigator.replace(Page::Main);
        Ok(Submission::Completed(session))
    }

    /// End the server session. Local storage is left as is.
    pub async fn logout(&self) -> Result<Submission<()>> {
        let artifact = self.artifact()?;
        let result = self.api.logout(artifact.as_ref()).await;

        let outcome = self.settle("logging out", result)?;
        if outcome == Submission::Completed(()) {
            log::info!("Logged out.");
        }
        Ok(outcome)
    }

    /// Create a space owned by the form's owner
    pub async fn create_space(&self, form: SpaceForm) -> Result<Submission<CreatedSpace>> {
        let artifact = self.artifact()?;
        let request = SpaceCreationRequest {
            name: form.name,
            owner: form.owner,
        };
        let result = self.api.create_space(artifact.as_ref(), &request).await;

        let outcome = self.settle("creating space", result)?;
        if let Submission::Completed(space) = &outcome {
            log::info!("Created space: {} {}", space.name, space.uri);
        }
        Ok(outcome)
    }

    /// Register a new account. No session is created.
    pub async fn register(&self, form: LoginForm) -> Result<Submission<RegisteredUser>> {
        let registration = Registration {
            username: form.username,
            password: form.password,
        };
        let result = self.api.register(&registration).await;

        let outcome = self.settle("registering", result)?;
        if let Submission::Completed(user) = &outcome {
            log::info!("Registered user: {}", user.username);
        }
        Ok(outcome)
    }

    /// Post a message into a space
    pub async fn post_message(
        &self,
        space: &SpaceRef,
        form: MessageForm,
    ) -> Result<Submission<PostedMessage>> {
        let artifact = self.artifact()?;
        let message = NewMessage {
            author: form.author,
            message: form.message,
        };
        let result = self
            .api
            .post_message(artifact.as_ref(), space, &message)
            .await;

        let outcome = self.settle("posting message", result)?;
        if let Submission::Completed(posted) = &outcome {
            log::info!("Posted message: {}", posted.uri);
        }
        Ok(outcome)
    }

    /// List message URIs in a space
    pub async fn list_messages(
        &self,
        space: &SpaceRef,
        since: Option<DateTime<Utc>>,
    ) -> Result<Submission<Vec<String>>> {
        let artifact = self.artifact()?;
        let result = self
            .api
            .list_messages(artifact.as_ref(), space, since)
            .await;
        self.settle("listing messages", result)
    }

    /// Read one message
    pub async fn read_message(&self, uri: &str) -> Result<Submission<Message>> {
        let artifact = self.artifact()?;
        let result = self.api.read_message(artifact.as_ref(), uri).await;
        self.settle("reading message", result)
    }

    /// Delete one message (moderators only)
    pub async fn delete_message(&self, uri: &str) -> Result<Submission<()>> {
        let artifact = self.artifact()?;
        let result = self.api.delete_message(artifact.as_ref(), uri).await;

        let outcome = self.settle("deleting message", result)?;
        if outcome == Submission::Completed(()) {
            log::info!("Deleted message: {}", uri);
        }
        Ok(outcome)
    }

    /// Grant a user a role in a space
    pub async fn add_member(
        &self,
        space: &SpaceRef,
        form: MemberForm,
    ) -> Result<Submission<Member>> {
        let artifact = self.artifact()?;
        let request = MemberRequest {
            username: form.username,
            role: form.role,
        };
        let result = self.api.add_member(artifact.as_ref(), space, &request).await;

        let outcome = self.settle("adding member", result)?;
        if let Submission::Completed(member) = &outcome {
            log::info!("Added member: {} ({})", member.username, member.role);
        }
        Ok(outcome)
    }

    /// Read the server's recent request audit trail
    pub async fn read_audit_log(&self) -> Result<Submission<Vec<AuditEntry>>> {
        let artifact = self.artifact()?;
        let result = self.api.read_audit_log(artifact.as_ref()).await;
        self.settle("reading audit log", result)
    }
}
