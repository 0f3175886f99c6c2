//! Shared command handlers

mod submission;

pub use submission::{report, submit};
