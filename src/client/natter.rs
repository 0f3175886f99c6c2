//! Natter API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::api::{AuditApi, SessionApi, SpaceApi, UserApi};
use super::models::{
    AuditEntry, CreatedSpace, Credential, LoginGrant, Member, MemberRequest, Message, NewMessage,
    PostedMessage, RegisteredUser, Registration, SpaceCreationRequest, SpaceRef, TokenResponse,
};
use super::policy::{AuthPolicy, session_cookie_from};
use crate::config::Config;
use crate::error::{ApiError, Error, Result};
use crate::session::SessionArtifact;

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Natter API client
pub struct NatterClient {
    http: HttpClient,
    /// Always ends in `/` so joined paths keep any prefix
    base_url: Url,
    policy: AuthPolicy,
}

impl NatterClient {
    /// Create a client for `base_url` attaching credentials per `policy`
    pub fn new(base_url: &str, policy: AuthPolicy, accept_invalid_certs: bool) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .user_agent(concat!("natter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidInput(format!("base URL '{}': {}", base_url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http,
            base_url,
            policy,
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, config.auth_mode, config.accept_invalid_certs)
    }

    /// Resolve a path or URI against the base URL.
    ///
    /// Paths are relative to the base URL whether or not they start with `/`.
    /// Absolute URIs must point below the base URL, so credentials never
    /// leave the configured API.
    fn url(&self, path_or_uri: &str) -> Result<Url> {
        if let Ok(uri) = Url::parse(path_or_uri) {
            if uri.as_str().starts_with(self.base_url.as_str()) {
                return Ok(uri);
            }
            return Err(Error::InvalidInput(format!(
                "'{}' is not under the API base URL {}",
                path_or_uri, self.base_url
            )));
        }

        self.base_url
            .join(path_or_uri.trim_start_matches('/'))
            .map_err(|e| Error::InvalidInput(format!("'{}': {}", path_or_uri, e)))
    }

    /// Start a request with the stored artifact attached per policy
    fn authed(
        &self,
        method: Method,
        path_or_uri: &str,
        artifact: Option<&SessionArtifact>,
    ) -> Result<RequestBuilder> {
        let builder = self.http.request(method, self.url(path_or_uri)?);
        Ok(self.policy.apply(builder, artifact))
    }

    /// Send a request and map non-success statuses onto [`ApiError`]
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(ApiError::from)?;
        log::debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("-> {}", status);

        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized.into());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::status(status, body).into())
    }

    /// Send a request and parse the JSON body
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        parse_json(response).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&text).map_err(|e| {
        ApiError::InvalidResponse(format!(
            "Failed to parse response: {}. Body was: {}",
            e, text
        ))
        .into()
    })
}

/// Attach a capability URI's access token, if any
fn with_access_token(builder: RequestBuilder, space: &SpaceRef) -> RequestBuilder {
    match &space.access_token {
        Some(token) => builder.query(&[("access_token", token)]),
        None => builder,
    }
}

#[async_trait]
impl SessionApi for NatterClient {
    fn policy(&self) -> AuthPolicy {
        self.policy
    }

    async fn login(&self, credential: &Credential) -> Result<LoginGrant> {
        let builder = self
            .http
            .post(self.url("/sessions")?)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, credential.basic_auth_header());

        let response = self.send(builder).await?;
        let session_cookie = session_cookie_from(response.headers());
        let body: TokenResponse = parse_json(response).await?;

        Ok(LoginGrant {
            token: body.token,
            session_cookie,
        })
    }

    async fn logout(&self, artifact: Option<&SessionArtifact>) -> Result<()> {
        let builder = self
            .authed(Method::DELETE, "/sessions", artifact)?
            .header(CONTENT_TYPE, "application/json");
        self.send(builder).await?;
        Ok(())
    }
}

#[async_trait]
impl SpaceApi for NatterClient {
    async fn create_space(
        &self,
        artifact: Option<&SessionArtifact>,
        request: &SpaceCreationRequest,
    ) -> Result<CreatedSpace> {
        let builder = self.authed(Method::POST, "/spaces", artifact)?.json(request);
        self.send_json(builder).await
    }

    async fn post_message(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        message: &NewMessage,
    ) -> Result<PostedMessage> {
        let builder = self
            .authed(Method::POST, &space.messages_path(), artifact)?
            .json(message);
        self.send_json(with_access_token(builder, space)).await
    }

    async fn list_messages(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<String>> {
        let mut builder = self.authed(Method::GET, &space.messages_path(), artifact)?;
        if let Some(since) = since {
            builder = builder.query(&[("since", since.to_rfc3339_opts(SecondsFormat::Secs, true))]);
        }
        self.send_json(with_access_token(builder, space)).await
    }

    async fn read_message(
        &self,
        artifact: Option<&SessionArtifact>,
        uri: &str,
    ) -> Result<Message> {
        self.send_json(self.authed(Method::GET, uri, artifact)?).await
    }

    async fn delete_message(&self, artifact: Option<&SessionArtifact>, uri: &str) -> Result<()> {
        self.send(self.authed(Method::DELETE, uri, artifact)?).await?;
        Ok(())
    }

    async fn add_member(
        &self,
        artifact: Option<&SessionArtifact>,
        space: &SpaceRef,
        request: &MemberRequest,
    ) -> Result<Member> {
        let builder = self
            .authed(Method::POST, &space.members_path(), artifact)?
            .json(request);
        self.send_json(with_access_token(builder, space)).await
    }
}

#[async_trait]
impl UserApi for NatterClient {
    async fn register(&self, registration: &Registration) -> Result<RegisteredUser> {
        let builder = self.http.post(self.url("/users")?).json(registration);
        self.send_json(builder).await
    }
}

#[async_trait]
impl AuditApi for NatterClient {
    async fn read_audit_log(&self, artifact: Option<&SessionArtifact>) -> Result<Vec<AuditEntry>> {
        self.send_json(self.authed(Method::GET, "/logs", artifact)?).await
    }
}
