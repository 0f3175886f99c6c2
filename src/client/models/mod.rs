//! Natter API data models
//!
//! Request and response bodies, organized by resource.

mod audit;
mod session;
mod space;
mod user;

pub use audit::AuditEntry;
pub use session::{Credential, LoginGrant, TokenResponse};
pub use space::{
    CreatedSpace, Member, MemberRequest, Message, NewMessage, PostedMessage, SpaceCreationRequest,
    SpaceRef, SpaceRole,
};
pub use user::{RegisteredUser, Registration};
