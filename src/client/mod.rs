//! Natter API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod natter;
pub mod policy;

pub use api::{AuditApi, SessionApi, SpaceApi, UserApi};
#[cfg(test)]
pub use mock::MockNatterClient;
pub use natter::NatterClient;
pub use policy::AuthPolicy;

/// Natter API client trait
///
/// Combines every sub-trait so callers can hold a single bound.
pub trait NatterApi: SessionApi + SpaceApi + UserApi + AuditApi {}

impl<T: SessionApi + SpaceApi + UserApi + AuditApi> NatterApi for T {}
