//! Error types for the Natter CLI

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Natter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
///
/// Every failed submission ends in exactly one of these. None of them is
/// retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not logged in. Run `natter login <username>` first.")]
    Unauthorized,

    #[error("{}", status_message(*status, status_text, body))]
    Status {
        status: StatusCode,
        status_text: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built locally and was never sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build a status error from the raw response parts.
    pub fn status(status: StatusCode, body: String) -> Self {
        ApiError::Status {
            status,
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        }
    }
}

/// Render `<status text>: <message>`, unwrapping `{"error": "..."}` bodies.
fn status_message(status: StatusCode, status_text: &str, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());

    if detail.is_empty() {
        format!("{} {}", status.as_u16(), status_text)
    } else {
        format!("{} {}: {}", status.as_u16(), status_text, detail)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file: {0}")]
    Read(String),

    #[error("Failed to write session file: {0}")]
    Write(String),
}
