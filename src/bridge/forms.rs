//! Form submissions
//!
//! Fields are read as submitted. The only check is the presence a `required`
//! input would enforce.

use crate::client::models::SpaceRole;
use crate::error::{Error, Result};

fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Login form: username and password
#[derive(Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let form = Self {
            username: username.into(),
            password: password.into(),
        };
        required("username", &form.username)?;
        required("password", &form.password)?;
        Ok(form)
    }
}

/// Space creation form: space name and owner
#[derive(Debug, Clone)]
pub struct SpaceForm {
    pub name: String,
    pub owner: String,
}

impl SpaceForm {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Result<Self> {
        let form = Self {
            name: name.into(),
            owner: owner.into(),
        };
        required("space name", &form.name)?;
        required("owner", &form.owner)?;
        Ok(form)
    }
}

/// Message form: author and text
#[derive(Debug, Clone)]
pub struct MessageForm {
    pub author: String,
    pub message: String,
}

impl MessageForm {
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Result<Self> {
        let form = Self {
            author: author.into(),
            message: message.into(),
        };
        required("author", &form.author)?;
        required("message", &form.message)?;
        Ok(form)
    }
}

/// Add-member form: username and role
#[derive(Debug, Clone)]
pub struct MemberForm {
    pub username: String,
    pub role: SpaceRole,
}

impl MemberForm {
    pub fn new(username: impl Into<String>, role: SpaceRole) -> Result<Self> {
        let form = Self {
            username: username.into(),
            role,
        };
        required("username", &form.username)?;
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_requires_both_fields() {
        assert!(LoginForm::new("alice", "secret").is_ok());
        assert!(LoginForm::new("", "secret").is_err());
        assert!(LoginForm::new("alice", "  ").is_err());
    }

    #[test]
    fn test_space_form_requires_both_fields() {
        assert!(SpaceForm::new("cats", "alice").is_ok());
        let err = SpaceForm::new("cats", "").unwrap_err();
        assert!(err.to_string().contains("owner is required"));
    }

    #[test]
    fn test_message_form_keeps_text_verbatim() {
        let form = MessageForm::new("alice", "  hi there ").unwrap();
        assert_eq!(form.message, "  hi there ");
    }

    #[test]
    fn test_member_form_requires_username() {
        let form = MemberForm::new("bob", SpaceRole::default()).unwrap();
        assert_eq!(form.role, SpaceRole::Member);
        assert!(MemberForm::new(" ", SpaceRole::Observer).is_err());
    }
}
