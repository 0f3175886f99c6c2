//! API trait definitions split by responsibility
//!
//! This module organizes the Natter API surface into focused sub-traits:
//! - [`SessionApi`] - Login and logout
//! - [`SpaceApi`] - Spaces and their messages
//! - [`UserApi`] - Account registration
//! - [`AuditApi`] - Request audit log
//!
//! The [`NatterApi`](super::NatterApi) super-trait combines all four.

mod audit;
mod session;
mod space;
mod user;

pub use audit::AuditApi;
pub use session::SessionApi;
pub use space::SpaceApi;
pub use user::UserApi;
