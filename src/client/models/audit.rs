//! Audit log models

use serde::{Deserialize, Serialize};

/// One row of `GET /logs`.
///
/// The server records a row when a request starts and another when it ends;
/// only the second carries a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: u64,
    pub method: String,
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
