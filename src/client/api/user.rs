//! User API trait

use async_trait::async_trait;

use crate::client::models::{RegisteredUser, Registration};
use crate::error::Result;

/// Account registration
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `POST /users`
    async fn register(&self, registration: &Registration) -> Result<RegisteredUser>;
}
